//! HTTP client for the Algorand node (algod) REST API.
//!
//! - [`http`] - protocol constants and request shaping
//! - [`algod`] - the [`AlgodClient`] and its endpoint wrappers

pub mod algod;
pub mod http;

// ============================================================================
// Re-exports
// ============================================================================

pub use algod::{AlgodClient, CanonicalEncode, TransactionQuery};
pub use http::{ALGOD_TOKEN_HEADER, API_VERSION_PREFIX, Headers, NO_AUTH_PATHS, UNVERSIONED_PATHS};
