//! Shared utilities for integration testing.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use comic_relay::config::RelayConfig;
use comic_relay::http::HttpServer;
use comic_relay::lifecycle::Shutdown;
use comic_relay::sources::{SourceConfig, SourceRegistry};

/// Response description returned by a programmable mock upstream.
#[derive(Clone)]
pub struct MockResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl MockResponse {
    pub fn json(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: Some("application/json".to_string()),
            body: body.to_string(),
        }
    }
}

/// Start a mock upstream that invokes `f` with the request path.
pub async fn start_mock_upstream<F, Fut>(addr: SocketAddr, f: F)
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = MockResponse> + Send + 'static,
{
    let listener = TcpListener::bind(addr).await.unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        // Read until the end of the request headers.
                        let mut raw = Vec::new();
                        let mut buf = [0u8; 1024];
                        loop {
                            match socket.read(&mut buf).await {
                                Ok(0) => break,
                                Ok(n) => {
                                    raw.extend_from_slice(&buf[..n]);
                                    if raw.windows(4).any(|w| w == b"\r\n\r\n") {
                                        break;
                                    }
                                }
                                Err(_) => return,
                            }
                        }

                        let request = String::from_utf8_lossy(&raw);
                        let path = request
                            .lines()
                            .next()
                            .and_then(|line| line.split_whitespace().nth(1))
                            .unwrap_or("/")
                            .to_string();

                        let response = f(path).await;
                        let status_text = match response.status {
                            200 => "200 OK",
                            201 => "201 Created",
                            204 => "204 No Content",
                            404 => "404 Not Found",
                            429 => "429 Too Many Requests",
                            500 => "500 Internal Server Error",
                            502 => "502 Bad Gateway",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let mut head = format!(
                            "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n",
                            status_text,
                            response.body.len()
                        );
                        if let Some(content_type) = &response.content_type {
                            head.push_str(&format!("Content-Type: {}\r\n", content_type));
                        }
                        head.push_str("\r\n");

                        let _ = socket.write_all(head.as_bytes()).await;
                        let _ = socket.write_all(response.body.as_bytes()).await;
                        let _ = socket.shutdown().await;
                        tokio::time::sleep(Duration::from_millis(10)).await;
                    });
                }
                Err(_) => break,
            }
        }
    });
}

/// Registry with one komikstation-style source pinned to `origin`.
#[allow(dead_code)]
pub fn test_registry(origin: &str) -> SourceRegistry {
    let mut registry = SourceRegistry::new();
    registry.insert(
        "komikstation",
        SourceConfig::new(
            origin,
            [
                (
                    "home".to_string(),
                    "/comic/komikstation/home".to_string(),
                ),
                (
                    "popular".to_string(),
                    "/comic/komikstation/popular".to_string(),
                ),
                (
                    "manga".to_string(),
                    "/comic/komikstation/manga".to_string(),
                ),
            ],
            ["manga".to_string(), "popular".to_string()],
            Some(vec!["/proxy/komikstation/home".to_string()]),
        ),
    );
    registry
}

/// Start a relay server on `addr` over the given registry.
///
/// Returns the shutdown handle; dropping it also stops the server.
#[allow(dead_code)]
pub async fn spawn_relay(addr: SocketAddr, sources: SourceRegistry) -> Shutdown {
    let mut config = RelayConfig::default();
    config.listener.bind_address = addr.to_string();

    let server = HttpServer::with_sources(config, sources);
    let listener = TcpListener::bind(addr).await.unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(100)).await;
    shutdown
}

/// A reqwest client that ignores environment proxy settings.
#[allow(dead_code)]
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .build()
        .unwrap()
}
