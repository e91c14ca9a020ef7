//! Address text format.
//!
//! Accepts `0x` followed by exactly 40 hex digits in any case. Mixed-case
//! input is not checked against EIP-55; rendering always uses the checksum
//! form.

use alloy::primitives::Address;

use crate::blockchain::types::{BlockchainError, BlockchainResult};

/// Total length of a textual address, prefix included.
pub const ADDRESS_TEXT_LEN: usize = 42;

/// Whether `s` matches `^0x[a-fA-F0-9]{40}$`.
pub fn is_valid_address(s: &str) -> bool {
    s.len() == ADDRESS_TEXT_LEN
        && s.starts_with("0x")
        && s[2..].bytes().all(|b| b.is_ascii_hexdigit())
}

/// Parse a textual address.
pub fn parse_address(s: &str) -> BlockchainResult<Address> {
    if !is_valid_address(s) {
        return Err(BlockchainError::InvalidAddress(format!(
            "'{}' is not 0x followed by 40 hex digits",
            s
        )));
    }
    s.parse::<Address>()
        .map_err(|e| BlockchainError::InvalidAddress(format!("'{}': {}", s, e)))
}

/// EIP-55 mixed-case rendering.
pub fn to_checksum(address: &Address) -> String {
    address.to_checksum(None)
}
