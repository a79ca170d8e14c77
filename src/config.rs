//! Client configuration.
//!
//! This module provides [`ClientConfig`], the connection settings for an
//! [`AlgodClient`](crate::AlgodClient): node address, API token, and extra
//! headers sent with every request.
//!
//! # Configuration File Location
//!
//! [`ClientConfig::default_path`] resolves to:
//! - Linux: `~/.config/algod-client/config.json`
//! - macOS: `~/Library/Application Support/algod-client/config.json`
//! - Windows: `%APPDATA%/algod-client/config.json`
//!
//! # Example
//!
//! ```ignore
//! use algod_client::ClientConfig;
//!
//! let config = ClientConfig::load(ClientConfig::default_path()?)?;
//! let client = algod_client::AlgodClient::from_config(config)?;
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::client::http::Headers;
use crate::domain::ConfigError;

// ============================================================================
// Constants
// ============================================================================

/// Application name used for the configuration directory.
const APP_NAME: &str = "algod-client";

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Environment variable holding the node address.
pub const ADDRESS_VAR: &str = "ALGOD_ADDRESS";

/// Environment variable holding the API token.
pub const TOKEN_VAR: &str = "ALGOD_TOKEN";

/// Environment variable holding extra headers as `NAME=VALUE,NAME=VALUE`.
pub const HEADERS_VAR: &str = "ALGOD_HEADERS";

// ============================================================================
// ClientConfig
// ============================================================================

/// Connection settings for a node.
///
/// Immutable once handed to a client. `Debug` output redacts the token.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the node, e.g. `http://localhost:8080`.
    pub address: String,
    /// API token sent in the `X-Algo-API-Token` header.
    pub token: String,
    /// Extra headers sent with every request, keyed by lowercase name.
    #[serde(default, deserialize_with = "deserialize_headers")]
    pub headers: Headers,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("address", &self.address)
            .field("token", &"<redacted>")
            .field("headers", &self.headers)
            .finish()
    }
}

impl ClientConfig {
    #[must_use]
    pub fn new(address: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            token: token.into(),
            headers: Headers::new(),
        }
    }

    /// Replaces the extra headers.
    #[must_use]
    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = normalize_headers(headers);
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .insert(name.into().to_ascii_lowercase(), value.into());
        self
    }

    /// Builds a configuration from `ALGOD_ADDRESS`, `ALGOD_TOKEN`, and the
    /// optional `ALGOD_HEADERS`.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or the headers
    /// variable is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or the headers
    /// variable is malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let address = lookup(ADDRESS_VAR).ok_or(ConfigError::MissingVar(ADDRESS_VAR))?;
        let token = lookup(TOKEN_VAR).ok_or(ConfigError::MissingVar(TOKEN_VAR))?;
        let headers = match lookup(HEADERS_VAR) {
            Some(raw) => parse_header_list(raw.split(','))?,
            None => Headers::new(),
        };

        Ok(Self {
            address,
            token,
            headers,
        })
    }

    /// Returns the path to the default configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform configuration directory cannot be
    /// determined.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let mut path = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        Ok(path)
    }

    /// Loads the configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Saves the configuration as pretty JSON, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Parse `NAME=VALUE` entries into a header map, skipping blank entries.
///
/// # Errors
///
/// Returns `ConfigError::InvalidHeader` for an entry without `=` or with an
/// empty name.
pub fn parse_header_list<'a, I>(entries: I) -> Result<Headers, ConfigError>
where
    I: IntoIterator<Item = &'a str>,
{
    entries
        .into_iter()
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.split_once('=') {
            Some((name, value)) if !name.trim().is_empty() => {
                Ok((name.trim().to_ascii_lowercase(), value.trim().to_string()))
            }
            _ => Err(ConfigError::InvalidHeader(entry.to_string())),
        })
        .collect()
}

/// Lowercase header names so each name appears once per map.
fn normalize_headers(headers: Headers) -> Headers {
    headers
        .into_iter()
        .map(|(name, value)| (name.to_ascii_lowercase(), value))
        .collect()
}

fn deserialize_headers<'de, D>(deserializer: D) -> Result<Headers, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Headers::deserialize(deserializer).map(normalize_headers)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_from_lookup() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            (ADDRESS_VAR, "http://localhost:8080"),
            (TOKEN_VAR, "secret"),
            (HEADERS_VAR, "X-Api-Key=abc, X-Trace = 1"),
        ]))
        .unwrap();

        assert_eq!(config.address, "http://localhost:8080");
        assert_eq!(config.token, "secret");
        assert_eq!(config.headers.get("x-api-key").map(String::as_str), Some("abc"));
        assert_eq!(config.headers.get("x-trace").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_from_lookup_missing_token() {
        let err = ClientConfig::from_lookup(lookup_from(&[(ADDRESS_VAR, "http://node")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar(TOKEN_VAR)));
    }

    #[test]
    fn test_parse_header_list_rejects_missing_equals() {
        let err = parse_header_list(["X-Good=1", "bad"]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHeader(entry) if entry == "bad"));
    }

    #[test]
    fn test_parse_header_list_skips_blank_entries() {
        let headers = parse_header_list(["", " ", "A=b"]).unwrap();
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn test_header_names_differing_in_case_collapse() {
        let config = ClientConfig::new("http://node", "t")
            .with_header("X-A", "first")
            .with_header("x-a", "second");
        assert_eq!(config.headers.len(), 1);
        assert_eq!(config.headers.get("x-a").map(String::as_str), Some("second"));

        let parsed = parse_header_list(["x-b=1", "X-B=2"]).unwrap();
        assert_eq!(parsed, Headers::from([("x-b".to_string(), "2".to_string())]));
    }

    #[test]
    fn test_config_from_json_lowercases_header_names() {
        let config: ClientConfig = serde_json::from_str(
            r#"{"address": "http://node", "token": "t", "headers": {"X-Api-Key": "k"}}"#,
        )
        .unwrap();
        assert_eq!(config.headers.get("x-api-key").map(String::as_str), Some("k"));
    }

    #[test]
    fn test_config_from_json_defaults_headers() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"address": "http://node", "token": "t"}"#).unwrap();
        assert!(config.headers.is_empty());
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = ClientConfig::new("http://node", "super-secret");
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);
        let config = ClientConfig::new("http://node", "t").with_header("X-Api-Key", "abc");

        config.save(&path).unwrap();
        let loaded = ClientConfig::load(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_default_path_ends_with_app_dir() {
        if let Ok(path) = ClientConfig::default_path() {
            assert!(path.ends_with(Path::new(APP_NAME).join(CONFIG_FILE)));
        }
    }
}
