//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! built-in defaults
//!     ← optional config file (TOML), loader.rs
//!     ← command-line overrides
//!     → validation.rs (semantic checks)
//!     → ClientConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so the binary runs with no file at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, resolve_config, ConfigError, ConfigOverrides};
pub use schema::{ClientConfig, DemoConfig, ObservabilityConfig, RpcConfig};
