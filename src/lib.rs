//! Typed async client for the Algorand node daemon (algod) v1 REST API.
//!
//! [`AlgodClient`] builds requests against the node's fixed set of endpoints,
//! attaches the `X-Algo-API-Token` header, and decodes JSON responses into
//! the types in [`domain`]. Failures surface as [`AlgodError`].

pub mod client;
pub mod config;
pub mod domain;

pub use client::{AlgodClient, CanonicalEncode, Headers, TransactionQuery};
pub use config::ClientConfig;
pub use domain::{AlgodError, ConfigError, Result};
