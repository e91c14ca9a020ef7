//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events with structured fields
//!
//! Consumers:
//!     → logging.rs subscriber, writing to stderr
//! ```
//!
//! # Design Decisions
//! - stdout is reserved for the demonstration output
//! - `RUST_LOG` wins over the configured level when set

pub mod logging;

pub use logging::init_logging;
