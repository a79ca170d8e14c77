//! Common test utilities for algod-client integration tests.

use algod_client::{AlgodClient, ClientConfig};
use wiremock::MockServer;

/// API token used by every test client.
pub const TEST_TOKEN: &str = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

/// Start a mock node.
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock node.
pub fn client_for(server: &MockServer) -> AlgodClient {
    AlgodClient::from_config(ClientConfig::new(server.uri(), TEST_TOKEN))
        .expect("client should build")
}

/// Client pointed at the mock node with configured extra headers.
#[allow(dead_code)]
pub fn client_with_header(server: &MockServer, name: &str, value: &str) -> AlgodClient {
    AlgodClient::from_config(ClientConfig::new(server.uri(), TEST_TOKEN).with_header(name, value))
        .expect("client should build")
}
