//! Block endpoints for AlgodClient.

use super::AlgodClient;
use crate::domain::{AlgodError, Block};

impl AlgodClient {
    /// Return the block at `round`.
    ///
    /// # Errors
    ///
    /// Returns an error if the network request fails or the node does not
    /// have the block.
    pub async fn block_info(&self, round: u64) -> Result<Block, AlgodError> {
        self.get(&format!("/block/{round}")).await
    }
}
