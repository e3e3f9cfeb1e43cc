//! Shared utilities for integration testing.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use proxyauth::registry::loader::parse_registry;
use proxyauth::{HttpServer, PasswordHash, ServiceConfig, Shutdown};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Realm file used by every integration test.
pub const USERS_JSON: &str = r#"[
    {
        "domain": "topcoder.com",
        "users": [
            { "username": "takumi", "password": "ilovego" },
            { "username": "teru", "password": "ilovejava" },
            { "username": "toshi", "password": "iloveapex" }
        ]
    },
    {
        "domain": "appirio.com",
        "users": [
            { "username": "jun", "password": "ilovetopcoder" },
            { "username": "narinder", "password": "ilovesamurai" },
            { "username": "chris", "password": "ilovesushi" }
        ]
    }
]"#;

/// A running service bound to an ephemeral port.
pub struct TestService {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<Result<(), std::io::Error>>,
}

impl TestService {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start the service over `USERS_JSON`.
pub async fn spawn_service() -> TestService {
    spawn_service_with(ServiceConfig::default()).await
}

/// Start the service with a custom configuration over `USERS_JSON`.
pub async fn spawn_service_with(config: ServiceConfig) -> TestService {
    let registry = Arc::new(parse_registry(USERS_JSON).unwrap());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, registry);
    let server_shutdown = shutdown.subscribe();
    let handle = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    TestService {
        addr,
        shutdown,
        handle,
    }
}

/// Client that bypasses any environment proxy.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

/// Pre-hash a plaintext password the way callers must.
pub fn hash(plaintext: &str) -> String {
    PasswordHash::digest(plaintext).to_string()
}
