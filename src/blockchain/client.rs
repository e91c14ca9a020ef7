//! Blockchain RPC client.
//!
//! # Responsibilities
//! - Query chain state (block number, balances, gas price, nonce, chain id)
//! - Decode hex quantities into [`Amount`]
//! - Own the transport and release it exactly once
//!
//! Every call is a single round trip. Nothing is retried or cached.

use alloy::primitives::{hex, Address, U256};
use serde_json::{json, Value};
use std::time::Duration;
use url::Url;

use crate::blockchain::transport::{HttpTransport, Transport};
use crate::blockchain::types::{
    Amount, BlockTag, BlockchainError, BlockchainResult, ChainId, RpcConfig,
};

/// Read-only JSON-RPC client for a single node endpoint.
pub struct RpcClient<T = HttpTransport> {
    /// Node endpoint, fixed for the client's lifetime.
    endpoint: Url,
    /// `None` once the client has been shut down.
    transport: Option<T>,
}

impl RpcClient<HttpTransport> {
    /// Create a client that speaks JSON-RPC over HTTP.
    pub fn connect(config: &RpcConfig) -> BlockchainResult<Self> {
        let endpoint: Url = config.url.parse().map_err(|e| {
            BlockchainError::Rpc(format!("Invalid RPC URL '{}': {}", config.url, e))
        })?;
        let transport = HttpTransport::new(endpoint.clone(), Duration::from_secs(config.timeout_secs))?;

        tracing::info!(
            rpc_url = %endpoint,
            timeout_secs = config.timeout_secs,
            "RPC client initialized"
        );

        Ok(Self::with_transport(endpoint, transport))
    }
}

impl<T: Transport> RpcClient<T> {
    /// Create a client over an existing transport.
    pub fn with_transport(endpoint: Url, transport: T) -> Self {
        Self {
            endpoint,
            transport: Some(transport),
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn is_closed(&self) -> bool {
        self.transport.is_none()
    }

    fn transport(&self) -> BlockchainResult<&T> {
        self.transport.as_ref().ok_or(BlockchainError::ClientClosed)
    }

    async fn query_quantity(&self, method: &str, params: Value) -> BlockchainResult<Amount> {
        let result = self.transport()?.request(method, params).await?;
        decode_quantity(&result)
            .map_err(|e| BlockchainError::Rpc(format!("{} returned {}: {}", method, result, e)))
    }

    /// Get the latest block number.
    pub async fn get_block_number(&self) -> BlockchainResult<Amount> {
        self.query_quantity("eth_blockNumber", json!([])).await
    }

    /// Get the balance of an address in wei.
    pub async fn get_balance(&self, address: Address, block: BlockTag) -> BlockchainResult<Amount> {
        self.query_quantity("eth_getBalance", json!([address_param(&address), block.to_rpc_param()]))
            .await
    }

    /// Get current gas price in wei.
    pub async fn get_gas_price(&self) -> BlockchainResult<Amount> {
        self.query_quantity("eth_gasPrice", json!([])).await
    }

    /// Get the chain ID reported by the node.
    pub async fn get_chain_id(&self) -> BlockchainResult<ChainId> {
        let id = self.query_quantity("eth_chainId", json!([])).await?;
        id.to_u64()
            .map(ChainId)
            .ok_or_else(|| BlockchainError::Rpc(format!("Chain ID {} does not fit in 64 bits", id)))
    }

    /// Get the transaction count (nonce) for an address.
    pub async fn get_transaction_count(
        &self,
        address: Address,
        block: BlockTag,
    ) -> BlockchainResult<Amount> {
        self.query_quantity(
            "eth_getTransactionCount",
            json!([address_param(&address), block.to_rpc_param()]),
        )
        .await
    }
}

impl<T> RpcClient<T> {
    /// Release the transport. Later queries fail with `ClientClosed`.
    ///
    /// Calling this more than once is a no-op.
    pub fn shutdown(&mut self) {
        if self.transport.take().is_some() {
            tracing::info!(rpc_url = %self.endpoint, "RPC client shut down");
        }
    }
}

impl<T> Drop for RpcClient<T> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl<T> std::fmt::Debug for RpcClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("closed", &self.transport.is_none())
            .finish()
    }
}

/// Lowercase `0x` hex, as nodes expect in request params.
fn address_param(address: &Address) -> String {
    format!("0x{}", hex::encode(address))
}

/// Decode a JSON-RPC quantity (`"0x"` followed by hex digits).
pub fn decode_quantity(value: &Value) -> Result<Amount, String> {
    let text = value.as_str().ok_or("expected a hex string")?;
    let digits = text.strip_prefix("0x").ok_or("missing 0x prefix")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err("expected hex digits after 0x".to_string());
    }
    U256::from_str_radix(digits, 16)
        .map(Amount)
        .map_err(|e| e.to_string())
}
