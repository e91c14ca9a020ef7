//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! KeyManager (wallet.rs)
//!     → KeyPair → Credentials (address via keccak256)
//!
//! RpcClient (client.rs)
//!     → Transport (transport.rs, JSON-RPC over HTTP)
//!     → hex quantity → Amount (types.rs)
//! ```
//!
//! # Security Constraints
//! - Never log private keys or sensitive data
//! - Request timeouts live on the transport
//! - Errors surface immediately; nothing is retried

pub mod address;
pub mod client;
pub mod transport;
pub mod types;
pub mod wallet;

pub use address::parse_address;
pub use client::RpcClient;
pub use transport::{HttpTransport, Transport};
pub use types::{Amount, BlockTag, BlockchainError, BlockchainResult, ChainId};
pub use wallet::{derive_address, Credentials, KeyManager, KeyPair};
