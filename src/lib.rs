//! Typed Ethereum JSON-RPC client with unit conversion and key management.

pub mod blockchain;
pub mod config;
pub mod demo;
pub mod observability;
pub mod units;

pub use blockchain::{Amount, BlockchainError, Credentials, KeyManager, RpcClient};
pub use config::ClientConfig;
pub use demo::ExampleRunner;
pub use units::Denomination;
