//! Domain types for the algod v1 REST API.
//!
//! # Module Organization
//!
//! - [`error`] - Error types for client operations
//! - [`status`] - Node status, versions, and ledger supply
//! - [`transaction`] - Transactions, fees, and transaction parameters
//! - [`account`] - Account state
//! - [`block`] - Blocks

// ============================================================================
// Module Declarations
// ============================================================================

pub mod account;
pub mod block;
pub mod error;
pub mod status;
pub mod transaction;

// ============================================================================
// Re-exports
// ============================================================================

pub use account::Account;
pub use block::{Block, BlockHeader};
pub use error::{AlgodError, ConfigError};
pub use status::{BuildVersion, NodeStatus, Supply, Versions};
pub use transaction::{
    PaymentFields, PendingTransactions, Transaction, TransactionFee, TransactionId,
    TransactionList, TransactionParams,
};

/// Result alias for algod client operations.
pub type Result<T, E = AlgodError> = std::result::Result<T, E>;
