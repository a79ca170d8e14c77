//! Account endpoints for AlgodClient.

use reqwest::Method;

use super::{AlgodClient, TransactionQuery};
use crate::domain::{Account, AlgodError, Transaction, TransactionList};

impl AlgodClient {
    /// Return account information.
    ///
    /// # Errors
    ///
    /// Returns an error if the network request fails or the node rejects it.
    pub async fn account_info(&self, address: &str) -> Result<Account, AlgodError> {
        self.get(&format!("/account/{address}")).await
    }

    /// Return transactions for an address.
    ///
    /// Only the filters set on `query` are sent. Without an indexer the
    /// node requires a round range or a date range.
    ///
    /// # Errors
    ///
    /// Returns an error if the network request fails or the node rejects it.
    pub async fn transactions_by_address(
        &self,
        address: &str,
        query: &TransactionQuery,
    ) -> Result<TransactionList, AlgodError> {
        let path = format!("/account/{address}/transactions");
        self.request(Method::GET, &path, &query.to_params(), None, None)
            .await
    }

    /// Return information about a transaction sent by `address`.
    ///
    /// # Errors
    ///
    /// Returns an error if the network request fails or the node rejects it.
    pub async fn transaction_info(
        &self,
        address: &str,
        txid: &str,
    ) -> Result<Transaction, AlgodError> {
        self.get(&format!("/account/{address}/transaction/{txid}"))
            .await
    }
}
