//! Transaction types returned by the algod v1 API.
//!
//! Transactions are decoded leniently: well-known fields are typed, and
//! everything else the node sends is kept in [`Transaction::extra`] so no
//! data is lost between the wire and the caller.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// Transaction
// ============================================================================

/// Payment-specific fields of a transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentFields {
    /// Receiver address.
    pub to: String,
    /// Amount in microAlgos.
    pub amount: u64,
    /// Address that received the remainder when the sender closed out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close: Option<String>,
    #[serde(rename = "closeamount", skip_serializing_if = "Option::is_none")]
    pub close_amount: Option<u64>,
    #[serde(rename = "torewards", skip_serializing_if = "Option::is_none")]
    pub to_rewards: Option<u64>,
    #[serde(rename = "closerewards", skip_serializing_if = "Option::is_none")]
    pub close_rewards: Option<u64>,
}

/// A confirmed or pending transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transaction {
    /// Transaction type (`pay`, `keyreg`, `acfg`, ...).
    #[serde(rename = "type")]
    pub txn_type: String,
    /// Transaction ID.
    #[serde(rename = "tx")]
    pub id: String,
    /// Sender address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// Fee in microAlgos.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<u64>,
    #[serde(rename = "first-round", skip_serializing_if = "Option::is_none")]
    pub first_round: Option<u64>,
    #[serde(rename = "last-round", skip_serializing_if = "Option::is_none")]
    pub last_round: Option<u64>,
    /// Base64-encoded note field.
    #[serde(rename = "noteb64", skip_serializing_if = "Option::is_none")]
    pub note_b64: Option<String>,
    /// Confirmation round; absent while the transaction is pending.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round: Option<u64>,
    /// Reason the transaction was evicted from the pool, if any.
    #[serde(rename = "poolerror", skip_serializing_if = "Option::is_none")]
    pub pool_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<PaymentFields>,
    #[serde(rename = "genesisID", skip_serializing_if = "Option::is_none")]
    pub genesis_id: Option<String>,
    #[serde(rename = "genesishashb64", skip_serializing_if = "Option::is_none")]
    pub genesis_hash_b64: Option<String>,
    /// Fields not modelled above, preserved as sent by the node.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Transaction {
    /// Returns `true` if the transaction has been confirmed in a round.
    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        self.round.is_some_and(|round| round > 0)
    }

    /// Returns `true` if the node dropped the transaction from its pool.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        self.pool_error.as_deref().is_some_and(|err| !err.is_empty())
    }
}

// ============================================================================
// Transaction Collections
// ============================================================================

/// A list of transactions, as returned by `/v1/account/{addr}/transactions`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionList {
    pub transactions: Vec<Transaction>,
}

/// The transaction pool contents, as returned by `/v1/transactions/pending`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PendingTransactions {
    /// Pending transactions, possibly truncated to the requested maximum.
    pub truncated_txns: TransactionList,
    /// Total number of transactions in the pool.
    pub total_txns: u64,
}

// ============================================================================
// Fees and Parameters
// ============================================================================

/// Suggested fee per byte, from `/v1/transactions/fee`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionFee {
    /// Fee in microAlgos per byte.
    pub fee: u64,
}

/// Parameters needed to build a transaction, from `/v1/transactions/params`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionParams {
    /// Suggested fee in microAlgos per byte.
    pub fee: u64,
    #[serde(rename = "genesisID")]
    pub genesis_id: String,
    #[serde(rename = "genesishashb64")]
    pub genesis_hash_b64: String,
    #[serde(rename = "lastRound")]
    pub last_round: u64,
    #[serde(rename = "consensusVersion")]
    pub consensus_version: String,
    /// Minimum fee per transaction in microAlgos.
    #[serde(rename = "minFee")]
    pub min_fee: u64,
}

/// Response of a transaction submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionId {
    #[serde(rename = "txId")]
    pub tx_id: String,
}

// ============================================================================
// Tests
// ============================================================================
