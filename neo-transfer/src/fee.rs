//! Fee kinds, the override rule and the network fee formula.

use std::fmt;

use num_bigint::BigInt;
use num_traits::Signed;

/// Decimal places of GAS, the fee currency.
pub const GAS_DECIMALS: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeeKind {
    Network,
    System,
}

impl fmt::Display for FeeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Network => "network",
            Self::System => "system",
        })
    }
}

/// A node-computed minimum paired with the caller's override (0 = none).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeQuote {
    pub kind: FeeKind,
    pub minimum: i64,
    pub user_override: i64,
}

impl FeeQuote {
    pub fn new(kind: FeeKind, minimum: i64, user_override: i64) -> Self {
        Self {
            kind,
            minimum,
            user_override,
        }
    }

    /// The override when it is set and covers the minimum, otherwise the minimum.
    pub fn resolve(&self) -> i64 {
        if self.overrides() {
            self.user_override
        } else {
            self.minimum
        }
    }

    pub fn overrides(&self) -> bool {
        self.user_override > 0 && self.user_override >= self.minimum
    }
}

/// `fee_per_byte * (unsigned_size + witness_overhead) + verification_fee`, checked.
pub fn network_fee_minimum(
    fee_per_byte: i64,
    unsigned_size: usize,
    witness_overhead: i64,
    verification_fee: i64,
) -> Option<i64> {
    let size = i64::try_from(unsigned_size).ok()?.checked_add(witness_overhead)?;
    fee_per_byte.checked_mul(size)?.checked_add(verification_fee)
}

/// Renders an integer amount with `decimals` fractional digits.
pub fn format_units(amount: &BigInt, decimals: u8) -> String {
    let digits = amount.abs().to_string();
    let sign = if amount.is_negative() { "-" } else { "" };
    let decimals = usize::from(decimals);
    if decimals == 0 {
        return format!("{sign}{digits}");
    }
    let padded = format!("{digits:0>width$}", width = decimals + 1);
    let (whole, frac) = padded.split_at(padded.len() - decimals);
    format!("{sign}{whole}.{frac}")
}

pub fn format_gas(datoshi: i64) -> String {
    format_units(&BigInt::from(datoshi), GAS_DECIMALS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_above_minimum_wins() {
        assert_eq!(FeeQuote::new(FeeKind::Network, 100, 150).resolve(), 150);
        assert_eq!(FeeQuote::new(FeeKind::System, 100, 100).resolve(), 100);
    }

    #[test]
    fn low_or_missing_override_falls_back() {
        assert_eq!(FeeQuote::new(FeeKind::Network, 100, 99).resolve(), 100);
        assert_eq!(FeeQuote::new(FeeKind::System, 100, 0).resolve(), 100);
        assert!(!FeeQuote::new(FeeKind::System, 0, 0).overrides());
    }

    #[test]
    fn network_fee_formula() {
        assert_eq!(network_fee_minimum(1000, 250, 109, 1_000_390), Some(1_359_390));
        assert_eq!(network_fee_minimum(0, 250, 109, 1_000_390), Some(1_000_390));
    }

    #[test]
    fn network_fee_formula_detects_overflow() {
        assert_eq!(network_fee_minimum(i64::MAX, 250, 109, 0), None);
        assert_eq!(network_fee_minimum(1, 0, 0, i64::MAX), Some(i64::MAX));
        assert_eq!(network_fee_minimum(1, 1, 0, i64::MAX), None);
    }

    #[test]
    fn formats_units() {
        assert_eq!(format_gas(1_359_390), "0.01359390");
        assert_eq!(format_gas(300_000_000), "3.00000000");
        assert_eq!(format_units(&BigInt::from(42), 0), "42");
        assert_eq!(format_units(&BigInt::from(-5), 2), "-0.05");
    }
}
