//! Named units of value and their scale relative to wei.

use alloy::primitives::U256;
use std::fmt;
use std::str::FromStr;

use crate::blockchain::types::BlockchainError;

/// A unit of value with a fixed power-of-ten scale over wei.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Denomination {
    Wei,
    Kwei,
    Mwei,
    Gwei,
    Szabo,
    Finney,
    Ether,
    Kether,
    Mether,
    Gether,
    Tether,
}

impl Denomination {
    pub const ALL: [Denomination; 11] = [
        Denomination::Wei,
        Denomination::Kwei,
        Denomination::Mwei,
        Denomination::Gwei,
        Denomination::Szabo,
        Denomination::Finney,
        Denomination::Ether,
        Denomination::Kether,
        Denomination::Mether,
        Denomination::Gether,
        Denomination::Tether,
    ];

    /// Power of ten this unit represents in wei.
    pub fn decimals(&self) -> u8 {
        match self {
            Denomination::Wei => 0,
            Denomination::Kwei => 3,
            Denomination::Mwei => 6,
            Denomination::Gwei => 9,
            Denomination::Szabo => 12,
            Denomination::Finney => 15,
            Denomination::Ether => 18,
            Denomination::Kether => 21,
            Denomination::Mether => 24,
            Denomination::Gether => 27,
            Denomination::Tether => 30,
        }
    }

    /// Number of wei in one unit.
    pub fn scale_factor(&self) -> U256 {
        U256::from(10u64).pow(U256::from(self.decimals()))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Denomination::Wei => "wei",
            Denomination::Kwei => "kwei",
            Denomination::Mwei => "mwei",
            Denomination::Gwei => "gwei",
            Denomination::Szabo => "szabo",
            Denomination::Finney => "finney",
            Denomination::Ether => "ether",
            Denomination::Kether => "kether",
            Denomination::Mether => "mether",
            Denomination::Gether => "gether",
            Denomination::Tether => "tether",
        }
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Denomination {
    type Err = BlockchainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Denomination::ALL
            .into_iter()
            .find(|d| d.name() == lower)
            .ok_or_else(|| BlockchainError::InvalidAmount(format!("Unknown denomination '{}'", s)))
    }
}
