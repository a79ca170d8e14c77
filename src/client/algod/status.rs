//! Node status, health, version, and supply endpoints for AlgodClient.

use super::AlgodClient;
use crate::domain::{AlgodError, NodeStatus, Supply, Versions};

impl AlgodClient {
    /// Return node status.
    ///
    /// # Errors
    ///
    /// Returns an error if the network request fails or the node rejects it.
    pub async fn status(&self) -> Result<NodeStatus, AlgodError> {
        self.get("/status").await
    }

    /// Succeeds if the node is running.
    ///
    /// The health endpoint is unversioned and sent without the auth header.
    ///
    /// # Errors
    ///
    /// Returns an error if the node is unreachable or unhealthy.
    pub async fn health(&self) -> Result<(), AlgodError> {
        let _: serde_json::Value = self.get("/health").await?;
        Ok(())
    }

    /// Return node status immediately after `round`.
    ///
    /// The node holds the request open until round `round + 1` is reached
    /// (or its own server-side deadline expires).
    ///
    /// # Errors
    ///
    /// Returns an error if the network request fails or the node rejects it.
    pub async fn status_after_block(&self, round: u64) -> Result<NodeStatus, AlgodError> {
        self.get(&format!("/status/wait-for-block-after/{round}"))
            .await
    }

    /// Return the API versions supported by the node.
    ///
    /// # Errors
    ///
    /// Returns an error if the network request fails or the node rejects it.
    pub async fn versions(&self) -> Result<Versions, AlgodError> {
        self.get("/versions").await
    }

    /// Return supply details for the node's ledger.
    ///
    /// # Errors
    ///
    /// Returns an error if the network request fails or the node rejects it.
    pub async fn ledger_supply(&self) -> Result<Supply, AlgodError> {
        self.get("/ledger/supply").await
    }
}
