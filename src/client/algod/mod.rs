//! Algorand node (algod) API client.
//!
//! This module provides [`AlgodClient`], which translates node operations into
//! HTTP calls against the algod v1 REST API and decodes the JSON responses
//! into the types in [`crate::domain`].
//!
//! # Example
//!
//! ```no_run
//! use algod_client::AlgodClient;
//!
//! # async fn run() -> algod_client::Result<()> {
//! let client = AlgodClient::new("my-token", "http://localhost:8080", None)?;
//! let status = client.status().await?;
//! println!("last round: {}", status.last_round);
//! # Ok(())
//! # }
//! ```

use reqwest::{Client, Method};
use serde::de::DeserializeOwned;

use super::http::{self, Headers};
use crate::config::ClientConfig;
use crate::domain::AlgodError;

mod accounts;
mod blocks;
mod status;
mod transactions;

pub use transactions::{CanonicalEncode, TransactionQuery};


// ============================================================================
// Algod API Client
// ============================================================================

/// Client for a single algod node.
///
/// Holds no mutable state; clones share the underlying connection pool and
/// may be used concurrently.
#[derive(Debug, Clone)]
pub struct AlgodClient {
    config: ClientConfig,
    client: Client,
}

impl AlgodClient {
    /// Creates a new client.
    ///
    /// No network activity happens here and `address` is not validated; a
    /// malformed address surfaces as a transport error on the first call.
    ///
    /// # Errors
    ///
    /// Returns `AlgodError::ClientInit` if the HTTP client fails to initialize
    /// (e.g., TLS backend unavailable).
    pub fn new(
        token: impl Into<String>,
        address: impl Into<String>,
        headers: Option<Headers>,
    ) -> Result<Self, AlgodError> {
        let config = ClientConfig::new(address, token).with_headers(headers.unwrap_or_default());
        Self::from_config(config)
    }

    /// Creates a new client from a loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns `AlgodError::ClientInit` if the HTTP client fails to initialize.
    pub fn from_config(config: ClientConfig) -> Result<Self, AlgodError> {
        let client = Self::build_http_client()?;
        Ok(Self { config, client })
    }

    /// Creates a new client that sends requests through `client`.
    #[must_use]
    pub fn with_http_client(config: ClientConfig, client: Client) -> Self {
        Self { config, client }
    }

    fn build_http_client() -> Result<Client, AlgodError> {
        Client::builder()
            .build()
            .map_err(|e| AlgodError::client_init(e.to_string()))
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.config.address
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Execute a request against the node and decode the JSON response.
    ///
    /// `path` is the logical endpoint path (e.g. `/status`); the version
    /// prefix and auth header are applied according to the allow-lists in
    /// [`http`]. Per-call `headers` override configured ones.
    ///
    /// An empty success body decodes as JSON `null`.
    ///
    /// # Errors
    ///
    /// - `AlgodError::Transport` if the request could not be sent or the
    ///   response body could not be read.
    /// - `AlgodError::Api` if the node answered with a non-2xx status.
    /// - `AlgodError::Decode` if a 2xx body is not JSON of shape `T`.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, String)],
        body: Option<Vec<u8>>,
        headers: Option<&Headers>,
    ) -> Result<T, AlgodError> {
        let with_auth = http::requires_auth(path);
        let token = with_auth.then_some(self.config.token.as_str());
        let header_map = http::merge_headers(&self.config.headers, headers, token)?;

        let url = format!("{}{}", self.config.address, http::resolve_path(path));
        tracing::debug!(%method, %url, with_auth, "algod request");

        let mut request = self.client.request(method, &url).headers(header_map);
        if !params.is_empty() {
            request = request.query(params);
        }
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&bytes);
            let message = http::error_message(&text);
            tracing::debug!(status = status.as_u16(), %url, %message, "algod API error");
            return Err(AlgodError::api(status.as_u16(), message));
        }

        decode_body(&bytes)
    }

    /// GET `path` with no query parameters.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AlgodError> {
        self.request(Method::GET, path, &[], None, None).await
    }
}

/// Decode a success body as UTF-8 JSON.
fn decode_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AlgodError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| AlgodError::decode(format!("response body is not UTF-8: {e}")))?;

    let text = if text.trim().is_empty() { "null" } else { text };
    Ok(serde_json::from_str(text)?)
}
