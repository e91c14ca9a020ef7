//! Orchestration of the demonstration queries.

use alloy::primitives::Address;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use std::error::Error as _;
use std::io::Write;
use thiserror::Error;

use crate::blockchain::client::RpcClient;
use crate::blockchain::transport::{HttpTransport, Transport};
use crate::blockchain::types::{BlockTag, BlockchainError};
use crate::blockchain::wallet::{Credentials, KeyManager};
use crate::units::Denomination;

/// Failure of a demonstration step.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error(transparent)]
    Blockchain(#[from] BlockchainError),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Runs the fixed query sequence against one node.
pub struct ExampleRunner<T = HttpTransport, R = OsRng> {
    client: RpcClient<T>,
    keys: KeyManager<R>,
    /// Account whose balance is shown.
    address: Address,
}

impl<T: Transport, R: RngCore + CryptoRng> ExampleRunner<T, R> {
    pub fn new(client: RpcClient<T>, keys: KeyManager<R>, address: Address) -> Self {
        Self {
            client,
            keys,
            address,
        }
    }

    /// Run every step, writing results to `out` as they arrive.
    ///
    /// Stops at the first failing step.
    pub async fn run<W: Write>(&mut self, out: &mut W) -> Result<Credentials, DemoError> {
        writeln!(out, "🌐 Web3 Ethereum Client\n")?;

        let block_number = self.client.get_block_number().await?;
        tracing::debug!(%block_number, "Fetched latest block");
        writeln!(out, "Latest Block: {}", block_number)?;

        let gas_price = self.client.get_gas_price().await?;
        tracing::debug!(gas_price_wei = %gas_price, "Fetched gas price");
        writeln!(out, "Gas Price: {} gwei\n", gas_price.format_as(Denomination::Gwei))?;

        let balance = self.client.get_balance(self.address, BlockTag::Latest).await?;
        tracing::debug!(address = %self.address, balance_wei = %balance, "Fetched balance");
        writeln!(out, "💰 Balance for {}", self.address)?;
        writeln!(out, "   {} ETH\n", balance.format_as(Denomination::Ether))?;

        let credentials = self.keys.generate_credentials()?;
        writeln!(out, "🔐 Generated New Wallet:")?;
        writeln!(out, "   Address: {}", credentials.address())?;
        writeln!(
            out,
            "   Private Key: {}",
            credentials.key_pair().expose_private_key_hex().as_str()
        )?;
        writeln!(out, "\n   ⚠️  KEEP YOUR PRIVATE KEY SAFE!\n")?;

        writeln!(out, "✓ Done!")?;
        Ok(credentials)
    }

    /// Run the sequence, report a failure on `err`, and release the client.
    ///
    /// Returns `true` when every step completed.
    pub async fn execute<W: Write, E: Write>(mut self, out: &mut W, err: &mut E) -> bool {
        let result = self.run(out).await;
        self.client.shutdown();

        match result {
            Ok(credentials) => {
                tracing::info!(wallet = %credentials.address(), "Demonstration complete");
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Demonstration failed");
                report_error(err, &e);
                false
            }
        }
    }
}

/// Message, cause chain and debug form of `error`.
fn report_error<E: Write>(err: &mut E, error: &DemoError) {
    // Nowhere left to report a failing error stream.
    let _ = writeln!(err, "✗ Error: {}", error);
    let mut cause = error.source();
    while let Some(inner) = cause {
        let _ = writeln!(err, "  caused by: {}", inner);
        cause = inner.source();
    }
    let _ = writeln!(err, "  {:?}", error);
}
