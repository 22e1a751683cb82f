//! Common test utilities for suirpc-client integration tests
//!
//! This module provides a reusable mock JSON-RPC server and helpers for
//! testing client behavior without needing a real full node.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;

/// Mock JSON-RPC HTTP server for client testing
///
/// Accepts HTTP/1.1 POSTs, hands the request body to a handler, and replies
/// with the handler's payload as a `200 OK` JSON response - or a `500` with
/// an empty body when the handler returns `None`. Every received body is also
/// forwarded on a channel so tests can assert on the exact bytes the client
/// put on the wire.
pub struct MockRpcServer {
    addr: SocketAddr,
    shutdown_tx: mpsc::Sender<()>,
    request_rx: Option<mpsc::Receiver<String>>,
    hits: Arc<AtomicUsize>,
}

impl MockRpcServer {
    /// Start a mock server that answers every request with the same result
    pub async fn with_result(result: serde_json::Value) -> Self {
        Self::respond_with(move |_body| {
            let result = result.clone();
            async move { Some(mock_response(result)) }
        })
        .await
    }

    /// Start a mock server with a custom request handler
    ///
    /// The handler receives the raw request body and returns the response
    /// body, or `None` to answer with HTTP 500 and no body.
    pub async fn respond_with<F, Fut>(handler: F) -> Self
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Option<String>> + Send + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);
        let (request_tx, request_rx) = mpsc::channel::<String>(100);
        let hits = Arc::new(AtomicUsize::new(0));

        let handler = Arc::new(handler);
        let hits_counter = hits.clone();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = shutdown_rx.recv() => {
                        break;
                    }
                    accept_result = listener.accept() => {
                        if let Ok((stream, _)) = accept_result {
                            let request_tx = request_tx.clone();
                            let hits = hits_counter.clone();
                            let handler = handler.clone();

                            tokio::spawn(async move {
                                serve_connection(stream, request_tx, hits, handler).await;
                            });
                        }
                    }
                }
            }
        });

        Self {
            addr,
            shutdown_tx,
            request_rx: Some(request_rx),
            hits,
        }
    }

    /// Get the HTTP URL for pointing a client at this server
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// How many requests the server has received so far
    pub fn request_count(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Wait for the next request body received by the server
    ///
    /// Returns None if the server is shut down or the timeout expires.
    pub async fn wait_for_request(&mut self) -> Option<String> {
        if let Some(rx) = &mut self.request_rx {
            tokio::time::timeout(tokio::time::Duration::from_secs(5), rx.recv())
                .await
                .ok()
                .flatten()
        } else {
            None
        }
    }

    /// Shutdown the mock server
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(()).await;
        tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
    }
}

async fn serve_connection<F, Fut>(
    mut stream: TcpStream,
    request_tx: mpsc::Sender<String>,
    hits: Arc<AtomicUsize>,
    handler: Arc<F>,
) where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: std::future::Future<Output = Option<String>> + Send + 'static,
{
    let body = match read_request_body(&mut stream).await {
        Some(body) => body,
        None => return,
    };

    hits.fetch_add(1, Ordering::SeqCst);
    let _ = request_tx.send(body.clone()).await;

    let response = match handler(body).await {
        Some(payload) => format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            payload.len(),
            payload
        ),
        None => {
            "HTTP/1.1 500 Internal Server Error\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
                .to_string()
        }
    };

    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.flush().await;
}

/// Read one HTTP request off the stream and return its body
async fn read_request_body(stream: &mut TcpStream) -> Option<String> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    // Headers first
    let header_end = loop {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(pos) = find_subsequence(&buf, b"\r\n\r\n") {
            break pos + 4;
        }
        if buf.len() > 64 * 1024 {
            return None;
        }
    };

    let headers = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let content_length = headers
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.trim().eq_ignore_ascii_case("content-length") {
                value.trim().parse::<usize>().ok()
            } else {
                None
            }
        })
        .unwrap_or(0);

    // Then the body
    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    Some(String::from_utf8_lossy(&buf[header_end..header_end + content_length]).to_string())
}

fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Helper to create a mock JSON-RPC success response body
pub fn mock_response(result: serde_json::Value) -> String {
    serde_json::json!({
        "jsonrpc": "2.0",
        "result": result,
        "id": 1
    })
    .to_string()
}

/// Helper to create a mock JSON-RPC error response body
pub fn mock_error_response(code: i64, message: &str) -> String {
    serde_json::json!({
        "jsonrpc": "2.0",
        "error": {
            "code": code,
            "message": message
        },
        "id": 1
    })
    .to_string()
}

/// Install a logging subscriber for a test, if none is installed yet
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();
}
