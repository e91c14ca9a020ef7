//! Exact conversion between base-unit amounts and decimal strings.

use alloy::primitives::U256;

use crate::blockchain::types::{Amount, BlockchainError, BlockchainResult};
use crate::units::denomination::Denomination;

/// Convert a decimal string in `from` units to an exact wei amount.
///
/// Accepts `digits`, `digits.digits`, `.digits` and `digits.`. Signs,
/// exponents and whitespace are rejected, as is any fraction finer than
/// one wei.
pub fn to_base_units(amount: &str, from: Denomination) -> BlockchainResult<Amount> {
    let invalid = |reason: String| BlockchainError::InvalidAmount(format!("'{}': {}", amount, reason));

    let (int_part, frac_part) = amount.split_once('.').unwrap_or((amount, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(invalid("no digits".to_string()));
    }
    if !is_digits(int_part) || !is_digits(frac_part) {
        return Err(invalid("expected a non-negative decimal number".to_string()));
    }

    let frac_part = frac_part.trim_end_matches('0');
    let decimals = usize::from(from.decimals());
    if frac_part.len() > decimals {
        return Err(invalid(format!(
            "more than {} fractional digits for {}",
            decimals, from
        )));
    }

    let overflow = || invalid("exceeds 256 bits".to_string());
    let whole = parse_digits(int_part).ok_or_else(overflow)?;
    let frac = parse_digits(&format!("{:0<width$}", frac_part, width = decimals)).ok_or_else(overflow)?;

    whole
        .checked_mul(from.scale_factor())
        .and_then(|scaled| scaled.checked_add(frac))
        .map(Amount)
        .ok_or_else(overflow)
}

/// Render a wei amount in `to` units without rounding.
pub fn from_base_units(amount: Amount, to: Denomination) -> String {
    let scale = to.scale_factor();
    let whole = amount.0 / scale;
    let frac = amount.0 % scale;
    if frac.is_zero() {
        return whole.to_string();
    }

    let mut frac_str = format!("{:0>width$}", frac.to_string(), width = usize::from(to.decimals()));
    while frac_str.ends_with('0') {
        frac_str.pop();
    }
    format!("{}.{}", whole, frac_str)
}

impl Amount {
    /// Shorthand for [`from_base_units`].
    pub fn format_as(&self, to: Denomination) -> String {
        from_base_units(*self, to)
    }
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_digits(digits: &str) -> Option<U256> {
    if digits.is_empty() {
        return Some(U256::ZERO);
    }
    U256::from_str_radix(digits, 10).ok()
}
