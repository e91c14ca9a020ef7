//! Ethereum JSON-RPC demonstration client.
//!
//! # Architecture Overview
//!
//! ```text
//!   config (defaults ← file ← flags)
//!        │
//!        ▼
//!   ┌──────────────┐     JSON-RPC/HTTP     ┌──────────┐
//!   │  RpcClient   │ ────────────────────▶ │   node   │
//!   └──────┬───────┘                       └──────────┘
//!          │ block number, gas price, balance
//!          ▼
//!   ┌──────────────┐     ┌──────────────┐
//!   │ExampleRunner │ ──▶ │  KeyManager  │  new wallet
//!   └──────┬───────┘     └──────────────┘
//!          ▼
//!       stdout / stderr
//! ```
//!
//! Runs with no arguments against a public mainnet endpoint. Step failures
//! are reported on stderr and do not change the exit status; only errors
//! before the run starts (configuration, logging, client setup) do.

use clap::Parser;
use std::path::PathBuf;

use web3_client::blockchain::parse_address;
use web3_client::config::{resolve_config, ConfigOverrides};
use web3_client::observability::init_logging;
use web3_client::{ExampleRunner, KeyManager, RpcClient};

#[derive(Parser)]
#[command(name = "web3-client")]
#[command(about = "Query an Ethereum node and generate a fresh wallet", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON-RPC endpoint, overriding the configuration.
    #[arg(long)]
    rpc_url: Option<String>,

    /// Address whose balance is printed.
    #[arg(long)]
    address: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = resolve_config(
        cli.config.as_deref(),
        ConfigOverrides {
            rpc_url: cli.rpc_url,
            demo_address: cli.address,
        },
    )?;

    init_logging(&config.observability)?;

    tracing::info!(
        rpc_url = %config.rpc.url,
        demo_address = %config.demo.address,
        "web3-client v0.1.0 starting"
    );

    let client = RpcClient::connect(&config.rpc)?;
    let address = parse_address(&config.demo.address)?;
    let runner = ExampleRunner::new(client, KeyManager::new(), address);

    let completed = runner
        .execute(&mut std::io::stdout(), &mut std::io::stderr())
        .await;

    tracing::info!(completed, "Shutdown complete");
    Ok(())
}
