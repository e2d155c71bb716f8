//! Shared utilities for integration and load testing.

use std::net::SocketAddr;

use computer_catalog::config::CatalogConfig;
use computer_catalog::{Dataset, HttpServer, Shutdown};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A catalog server running on an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    shutdown: Shutdown,
    handle: JoinHandle<Result<(), std::io::Error>>,
}

impl TestServer {
    pub fn url(&self, path_and_query: &str) -> String {
        format!("http://{}{}", self.addr, path_and_query)
    }

    /// Trigger graceful shutdown and wait for the server task.
    #[allow(dead_code)]
    pub async fn stop(self) {
        self.shutdown.trigger();
        let _ = self.handle.await;
    }
}

/// Start the catalog server with default config and the reference dataset.
pub async fn start_server() -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(CatalogConfig::default(), Dataset::reference());
    let server_shutdown = shutdown.subscribe();

    let handle = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    TestServer {
        addr,
        shutdown,
        handle,
    }
}

/// A client that ignores system proxies and does not follow redirects.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

/// Fetch a path and decode the body as JSON.
#[allow(dead_code)]
pub async fn get_json(
    client: &reqwest::Client,
    server: &TestServer,
    path: &str,
) -> (u16, serde_json::Value) {
    let res = client.get(server.url(path)).send().await.expect("server unreachable");
    let status = res.status().as_u16();
    let body = res.json().await.expect("body is not JSON");
    (status, body)
}
