//! Error types for algod client operations.
//!
//! This module defines the error types returned by [`AlgodClient`](crate::AlgodClient)
//! calls and by configuration loading.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for algod client operations.
///
/// Each variant maps to a distinct failure mode: the request never got a
/// response, the node answered with an error status, or the node answered
/// successfully with a body that could not be decoded.
#[derive(Debug, Error)]
pub enum AlgodError {
    /// Network-related errors from HTTP requests (connect, send, body read).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response from the node.
    ///
    /// Displays as the node's `message` field, or the raw body text when the
    /// body was not a JSON object carrying one.
    #[error("{message}")]
    Api {
        /// HTTP status code returned by the node.
        status: u16,
        /// Error text reported by the node.
        message: String,
    },

    /// A successful response whose body was not the expected JSON.
    #[error("Decode error: {message}")]
    Decode {
        /// Description of what failed to decode.
        message: String,
    },

    /// Invalid caller input (malformed base64, bad header name or value).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to initialize HTTP client: {0}")]
    ClientInit(String),
}

impl AlgodError {
    /// Create a new API error from a status code and node message.
    #[must_use]
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a new decode error with the given message.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a new invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    #[must_use]
    pub fn client_init(message: impl Into<String>) -> Self {
        Self::ClientInit(message.into())
    }

    /// Returns `true` if the node answered with an error status.
    #[must_use]
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// Returns `true` if the request failed before a response arrived.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Returns `true` if a successful response could not be decoded.
    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// HTTP status code, if the node produced one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for AlgodError {
    fn from(err: serde_json::Error) -> Self {
        Self::decode(err.to_string())
    }
}

/// Errors raised while assembling a [`ClientConfig`](crate::ClientConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable was not set.
    #[error("Missing environment variable: {0}")]
    MissingVar(&'static str),

    /// A `NAME=VALUE` header entry was malformed.
    #[error("Invalid header entry '{0}', expected NAME=VALUE")]
    InvalidHeader(String),

    /// The platform config directory could not be determined.
    #[error(
        "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
    )]
    NoConfigDir,

    /// The config file could not be read.
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The config file was not valid JSON.
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

// ============================================================================
// Tests
// ============================================================================
