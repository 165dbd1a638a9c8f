//! Implementation of `UInt256`, used for transaction hashes.

use crate::constants::HASH_SIZE;
use crate::error::{PrimitiveError, PrimitiveResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The length of `UInt256` values in bytes.
pub const UINT256_SIZE: usize = HASH_SIZE;

/// A 256-bit hash stored little-endian; displayed big-endian with `0x`.
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct UInt256([u8; UINT256_SIZE]);

impl UInt256 {
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; UINT256_SIZE])
    }

    /// Creates a `UInt256` from little-endian bytes.
    pub fn from_bytes(value: &[u8]) -> PrimitiveResult<Self> {
        let bytes: [u8; UINT256_SIZE] = value.try_into().map_err(|_| {
            PrimitiveError::invalid_format(format!("Invalid UInt256 length: {}", value.len()))
        })?;
        Ok(Self(bytes))
    }

    #[inline]
    #[must_use]
    pub const fn to_array(&self) -> [u8; UINT256_SIZE] {
        self.0
    }

    /// Parses a big-endian hex string, with or without `0x`.
    pub fn parse(s: &str) -> PrimitiveResult<Self> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if digits.len() != UINT256_SIZE * 2 {
            return Err(PrimitiveError::invalid_format(format!(
                "UInt256 must be {} hex characters, got {}",
                UINT256_SIZE * 2,
                digits.len()
            )));
        }

        let mut bytes = hex::decode(digits)
            .map_err(|e| PrimitiveError::invalid_format(format!("Invalid UInt256 hex: {e}")))?;
        bytes.reverse();
        Self::from_bytes(&bytes)
    }

    #[must_use]
    pub fn to_hex_string(&self) -> String {
        let mut bytes = self.0;
        bytes.reverse();
        format!("0x{}", hex::encode(bytes))
    }
}

impl FromStr for UInt256 {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for UInt256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl fmt::Debug for UInt256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UInt256({})", self.to_hex_string())
    }
}

impl From<[u8; UINT256_SIZE]> for UInt256 {
    fn from(data: [u8; UINT256_SIZE]) -> Self {
        Self(data)
    }
}

impl Serialize for UInt256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for UInt256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uint256_display_reverses_bytes() {
        let mut bytes = [0u8; UINT256_SIZE];
        bytes[0] = 0xab;
        let hash = UInt256::from(bytes);
        let text = hash.to_string();
        assert!(text.ends_with("ab"));
        assert_eq!(UInt256::parse(&text).unwrap(), hash);
    }

    #[test]
    fn test_uint256_rejects_short_input() {
        assert!(UInt256::parse("0xabcdef").is_err());
    }
}
