//! Shared utilities for integration tests.

use camera_mock::config::ServerConfig;
use camera_mock::{CameraServer, MotionState, ServerHandle};
use tokio::net::TcpListener;

/// Any value passing the server's format-only digest check.
#[allow(dead_code)]
pub const DIGEST_HEADER: &str =
    r#"Digest username="ipc", realm="Camera", nonce="0123456789abcdef", uri="/cgi-bin/configManager.cgi", response="not-a-real-hash""#;

/// Start a server on an ephemeral loopback port.
pub async fn start_server() -> (ServerHandle, MotionState) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let motion = MotionState::new();
    let server = CameraServer::with_state(ServerConfig::default(), motion.clone());
    (server.start(listener).unwrap(), motion)
}

/// Base URL for a running server.
pub fn base_url(handle: &ServerHandle) -> String {
    format!("http://{}", handle.local_addr())
}

/// Full endpoint URL with the given query.
#[allow(dead_code)]
pub fn endpoint(handle: &ServerHandle, query: &str) -> String {
    format!("{}/cgi-bin/configManager.cgi?{}", base_url(handle), query)
}

/// Plain client without pooling or proxies, so every test hits the server directly.
#[allow(dead_code)]
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
