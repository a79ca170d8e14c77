//! HTTP request shaping for the algod REST API.
//!
//! Holds the fixed protocol data (auth header, version prefix, allow-lists)
//! and the pure helpers that turn a logical endpoint path into the path and
//! headers actually sent on the wire.

use std::collections::BTreeMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::domain::AlgodError;

// ============================================================================
// Constants
// ============================================================================

/// Header name for the algod API token.
pub const ALGOD_TOKEN_HEADER: &str = "X-Algo-API-Token";

/// Prefix prepended to every versioned endpoint path.
pub const API_VERSION_PREFIX: &str = "/v1";

/// Endpoints served without the version prefix.
pub const UNVERSIONED_PATHS: &[&str] = &["/health", "/versions", "/metrics", "/genesis"];

/// Endpoints that must not carry the auth header.
pub const NO_AUTH_PATHS: &[&str] = &["/health"];

/// Header name/value pairs as configured by callers.
pub type Headers = BTreeMap<String, String>;

// ============================================================================
// Path Resolution
// ============================================================================

/// Returns `true` if requests to `path` carry the auth header.
#[must_use]
pub fn requires_auth(path: &str) -> bool {
    !NO_AUTH_PATHS.contains(&path)
}

/// Returns `true` if `path` is served without the version prefix.
#[must_use]
pub fn is_unversioned(path: &str) -> bool {
    UNVERSIONED_PATHS.contains(&path)
}

/// Resolve a logical endpoint path into the path sent to the node.
///
/// ```
/// use algod_client::client::http::resolve_path;
///
/// assert_eq!(resolve_path("/status"), "/v1/status");
/// assert_eq!(resolve_path("/versions"), "/versions");
/// ```
#[must_use]
pub fn resolve_path(path: &str) -> String {
    if is_unversioned(path) {
        path.to_string()
    } else {
        format!("{API_VERSION_PREFIX}{path}")
    }
}

// ============================================================================
// Headers
// ============================================================================

/// Build the header map for a single request.
///
/// Configured headers go in first, per-call headers replace them by name,
/// and the auth header is added last when `token` is `Some`. When `token`
/// is `None` any auth header supplied through the header maps is dropped,
/// so no-auth paths never carry it.
///
/// # Errors
///
/// Returns `AlgodError::InvalidInput` if a header name or value is not
/// valid HTTP.
pub fn merge_headers(
    configured: &Headers,
    per_call: Option<&Headers>,
    token: Option<&str>,
) -> Result<HeaderMap, AlgodError> {
    let mut headers = HeaderMap::new();

    for (name, value) in configured.iter().chain(per_call.into_iter().flatten()) {
        headers.insert(header_name(name)?, header_value(name, value)?);
    }

    let auth = HeaderName::from_static("x-algo-api-token");
    match token {
        Some(token) => {
            let mut value = header_value(ALGOD_TOKEN_HEADER, token)?;
            value.set_sensitive(true);
            headers.insert(auth, value);
        }
        None => {
            headers.remove(auth);
        }
    }

    Ok(headers)
}

fn header_name(name: &str) -> Result<HeaderName, AlgodError> {
    HeaderName::from_bytes(name.as_bytes())
        .map_err(|_| AlgodError::invalid_input(format!("invalid header name '{name}'")))
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, AlgodError> {
    HeaderValue::from_str(value)
        .map_err(|_| AlgodError::invalid_input(format!("invalid value for header '{name}'")))
}

// ============================================================================
// Error Bodies
// ============================================================================

/// Extract the error text from a non-2xx response body.
///
/// Uses the `message` field when the body is a JSON object carrying one,
/// otherwise the raw body text verbatim.
#[must_use]
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            json.get("message").map(|message| match message {
                serde_json::Value::String(text) => text.clone(),
                other => other.to_string(),
            })
        })
        .unwrap_or_else(|| body.to_string())
}

// ============================================================================
// Tests
// ============================================================================
