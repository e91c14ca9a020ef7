//! JSON-RPC 2.0 transport.
//!
//! # Responsibilities
//! - Frame a method call as a JSON-RPC request
//! - POST it to the node endpoint
//! - Unwrap the `result` member or surface the `error` member
//!
//! The client only depends on the [`Transport`] trait, so tests can swap
//! the HTTP implementation for a scripted one.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use url::Url;

use crate::blockchain::types::{BlockchainError, BlockchainResult};

/// Something that can execute a single JSON-RPC call.
pub trait Transport {
    /// Send `method` with positional `params` and return the raw `result`.
    fn request(
        &self,
        method: &str,
        params: Value,
    ) -> impl Future<Output = BlockchainResult<Value>> + Send;
}

#[derive(Debug, Serialize)]
struct JsonRpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: Value,
}

#[derive(Debug, Deserialize)]
struct JsonRpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<JsonRpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct JsonRpcErrorObject {
    code: i64,
    message: String,
}

/// JSON-RPC over HTTP POST.
#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    url: Url,
    next_id: AtomicU64,
}

impl HttpTransport {
    /// Build a transport whose requests give up after `timeout`.
    pub fn new(url: Url, timeout: Duration) -> BlockchainResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BlockchainError::Rpc(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url,
            next_id: AtomicU64::new(1),
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl Transport for HttpTransport {
    async fn request(&self, method: &str, params: Value) -> BlockchainResult<Value> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = JsonRpcRequest {
            jsonrpc: "2.0",
            id,
            method,
            params,
        };

        tracing::debug!(id, method, "Sending JSON-RPC request");

        let res = self
            .client
            .post(self.url.clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| BlockchainError::Rpc(format!("{} request failed: {}", method, e)))?;

        let status = res.status();
        if !status.is_success() {
            return Err(BlockchainError::Rpc(format!(
                "{} returned HTTP status {}",
                method, status
            )));
        }

        let response: JsonRpcResponse = res
            .json()
            .await
            .map_err(|e| BlockchainError::Rpc(format!("{} response undecodable: {}", method, e)))?;

        if let Some(err) = response.error {
            return Err(BlockchainError::Rpc(format!(
                "{} failed with code {}: {}",
                method, err.code, err.message
            )));
        }

        response
            .result
            .ok_or_else(|| BlockchainError::Rpc(format!("{} response has no result", method)))
    }
}
