//! Denomination handling.
//!
//! # Data Flow
//! ```text
//! "1.5" + Denomination::Ether
//!     → convert.rs (exact decimal parse, scale by 10^18)
//!     → Amount (wei)
//!
//! Amount (wei) + Denomination::Gwei
//!     → convert.rs (divide by 10^9, render exact remainder)
//!     → "1.5"
//! ```
//!
//! # Design Decisions
//! - No floating point anywhere; all scaling is 256-bit integer math
//! - Inputs finer than the target unit are rejected, not rounded
//! - Renderings trim trailing zeros and drop the point for whole values

pub mod convert;
pub mod denomination;

pub use convert::{from_base_units, to_base_units};
pub use denomination::Denomination;
