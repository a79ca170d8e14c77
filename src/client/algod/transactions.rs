//! Transaction lookup and submission endpoints for AlgodClient.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::NaiveDate;
use reqwest::Method;

use super::AlgodClient;
use crate::client::http::Headers;
use crate::domain::{
    AlgodError, PendingTransactions, Transaction, TransactionFee, TransactionId, TransactionParams,
};

// ============================================================================
// Transaction Query
// ============================================================================

/// Filters for [`AlgodClient::transactions_by_address`].
///
/// Unset fields are omitted from the query string entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionQuery {
    /// No transactions before this round are returned.
    pub first_round: Option<u64>,
    /// No transactions after this round are returned.
    pub last_round: Option<u64>,
    /// Maximum number of transactions to return (node default is 100).
    pub max: Option<u64>,
    /// No transactions before this date are returned.
    pub from_date: Option<NaiveDate>,
    /// No transactions after this date are returned.
    pub to_date: Option<NaiveDate>,
}

impl TransactionQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn first_round(mut self, round: u64) -> Self {
        self.first_round = Some(round);
        self
    }

    #[must_use]
    pub fn last_round(mut self, round: u64) -> Self {
        self.last_round = Some(round);
        self
    }

    #[must_use]
    pub fn max(mut self, max: u64) -> Self {
        self.max = Some(max);
        self
    }

    #[must_use]
    pub fn from_date(mut self, date: NaiveDate) -> Self {
        self.from_date = Some(date);
        self
    }

    #[must_use]
    pub fn to_date(mut self, date: NaiveDate) -> Self {
        self.to_date = Some(date);
        self
    }

    /// Query-string pairs for the fields that are set.
    #[must_use]
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let date = |d: &NaiveDate| d.format("%Y-%m-%d").to_string();

        [
            ("firstRound", self.first_round.map(|v| v.to_string())),
            ("lastRound", self.last_round.map(|v| v.to_string())),
            ("max", self.max.map(|v| v.to_string())),
            ("fromDate", self.from_date.as_ref().map(date)),
            ("toDate", self.to_date.as_ref().map(date)),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect()
    }
}

// ============================================================================
// Canonical Encoding
// ============================================================================

/// Canonical binary encoding of a signed transaction.
///
/// Implemented by whatever transaction model the caller uses; the client
/// only needs the bytes the node expects on `POST /v1/transactions`.
pub trait CanonicalEncode {
    fn canonical_bytes(&self) -> Vec<u8>;
}

impl CanonicalEncode for [u8] {
    fn canonical_bytes(&self) -> Vec<u8> {
        self.to_vec()
    }
}

impl CanonicalEncode for Vec<u8> {
    fn canonical_bytes(&self) -> Vec<u8> {
        self.clone()
    }
}

// ============================================================================
// Endpoints
// ============================================================================

impl AlgodClient {
    /// Return pending transactions.
    ///
    /// `max` of 0 returns all pending transactions; it is still sent as
    /// `max=0`.
    ///
    /// # Errors
    ///
    /// Returns an error if the network request fails or the node rejects it.
    pub async fn pending_transactions(&self, max: u64) -> Result<PendingTransactions, AlgodError> {
        self.request(
            Method::GET,
            "/transactions/pending",
            &[("max", max.to_string())],
            None,
            None,
        )
        .await
    }

    /// Return information about a transaction in the pool.
    ///
    /// # Errors
    ///
    /// Returns an error if the network request fails or the node rejects it.
    pub async fn pending_transaction_info(&self, txid: &str) -> Result<Transaction, AlgodError> {
        self.get(&format!("/transactions/pending/{txid}")).await
    }

    /// Return a transaction by ID. Requires a node with the indexer enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the network request fails or the node rejects it.
    pub async fn transaction_by_id(&self, txid: &str) -> Result<Transaction, AlgodError> {
        self.get(&format!("/transaction/{txid}")).await
    }

    /// Return the suggested transaction fee.
    ///
    /// # Errors
    ///
    /// Returns an error if the network request fails or the node rejects it.
    pub async fn suggested_fee(&self) -> Result<TransactionFee, AlgodError> {
        self.get("/transactions/fee").await
    }

    /// Return the suggested parameters for building a transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the network request fails or the node rejects it.
    pub async fn suggested_params(&self) -> Result<TransactionParams, AlgodError> {
        self.get("/transactions/params").await
    }

    /// Broadcast a base64-encoded signed transaction and return its ID.
    ///
    /// # Errors
    ///
    /// Returns `AlgodError::InvalidInput` if `txn_b64` is not valid base64,
    /// otherwise an error if the network request fails or the node rejects
    /// the transaction.
    pub async fn send_raw_transaction(
        &self,
        txn_b64: &str,
        headers: Option<&Headers>,
    ) -> Result<String, AlgodError> {
        let raw = STANDARD
            .decode(txn_b64)
            .map_err(|e| AlgodError::invalid_input(format!("transaction is not base64: {e}")))?;

        let response: TransactionId = self
            .request(Method::POST, "/transactions", &[], Some(raw), headers)
            .await?;
        tracing::debug!(txid = %response.tx_id, "transaction submitted");
        Ok(response.tx_id)
    }

    /// Broadcast a signed transaction and return its ID.
    ///
    /// The transaction is canonically encoded and submitted through
    /// [`send_raw_transaction`](Self::send_raw_transaction).
    ///
    /// # Errors
    ///
    /// Returns an error if the network request fails or the node rejects
    /// the transaction.
    pub async fn send_transaction<T: CanonicalEncode + ?Sized>(
        &self,
        txn: &T,
        headers: Option<&Headers>,
    ) -> Result<String, AlgodError> {
        let encoded = STANDARD.encode(txn.canonical_bytes());
        self.send_raw_transaction(&encoded, headers).await
    }
}
