//! Shared mocks for integration tests.

use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use web3_client::blockchain::{BlockchainError, BlockchainResult, Transport};

/// In-memory transport answering from a method table.
#[allow(dead_code)]
#[derive(Default)]
pub struct MockTransport {
    responses: HashMap<String, Result<Value, String>>,
    calls: Arc<Mutex<Vec<String>>>,
    released: Arc<AtomicBool>,
}

#[allow(dead_code)]
impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, method: &str, result: Value) -> Self {
        self.responses.insert(method.to_string(), Ok(result));
        self
    }

    pub fn fail(mut self, method: &str, reason: &str) -> Self {
        self.responses.insert(method.to_string(), Err(reason.to_string()));
        self
    }

    /// Methods called so far, in order.
    pub fn calls(&self) -> Arc<Mutex<Vec<String>>> {
        self.calls.clone()
    }

    /// Set once the transport has been dropped.
    pub fn released(&self) -> Arc<AtomicBool> {
        self.released.clone()
    }
}

impl Transport for MockTransport {
    async fn request(&self, method: &str, _params: Value) -> BlockchainResult<Value> {
        self.calls.lock().unwrap().push(method.to_string());
        match self.responses.get(method) {
            Some(Ok(result)) => Ok(result.clone()),
            Some(Err(reason)) => Err(BlockchainError::Rpc(reason.clone())),
            None => Err(BlockchainError::Rpc(format!("no mock for {}", method))),
        }
    }
}

impl Drop for MockTransport {
    fn drop(&mut self) {
        self.released.store(true, Ordering::SeqCst);
    }
}

/// JSON-RPC success envelope echoing the request id.
#[allow(dead_code)]
pub fn rpc_result(request: &Value, result: Value) -> String {
    json!({ "jsonrpc": "2.0", "id": request["id"], "result": result }).to_string()
}

/// JSON-RPC error envelope echoing the request id.
#[allow(dead_code)]
pub fn rpc_error(request: &Value, code: i64, message: &str) -> String {
    json!({
        "jsonrpc": "2.0",
        "id": request["id"],
        "error": { "code": code, "message": message }
    })
    .to_string()
}

/// Start a mock JSON-RPC node on an ephemeral port.
///
/// `handler` receives the decoded request body and returns the HTTP status
/// and response body.
#[allow(dead_code)]
pub async fn start_rpc_backend<F>(handler: F) -> SocketAddr
where
    F: Fn(Value) -> (u16, String) + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handler = Arc::new(handler);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let handler = handler.clone();
                    tokio::spawn(async move {
                        let Some(request) = read_request_body(&mut socket).await else {
                            return;
                        };
                        let (status, body) = handler(request);
                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            500 => "500 Internal Server Error",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

async fn read_request_body(socket: &mut TcpStream) -> Option<Value> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos;
        }
    };

    let headers = String::from_utf8_lossy(&buf[..header_end]).to_ascii_lowercase();
    let content_length = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(0);

    let body_start = header_end + 4;
    while buf.len() < body_start + content_length {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    serde_json::from_slice(&buf[body_start..body_start + content_length]).ok()
}
