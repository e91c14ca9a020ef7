//! Demonstration sequence run by the binary.
//!
//! # Data Flow
//! ```text
//! RpcClient: block number → gas price → balance
//!     → KeyManager: generate credentials
//!     → progressive lines on stdout
//!
//! Any failure:
//!     → remaining steps skipped
//!     → error and causes on stderr
//!     → transport released
//! ```

pub mod runner;

pub use runner::{DemoError, ExampleRunner};
