//! Implementation of `UInt160`, the 160-bit script hash type.

use crate::constants::{ADDRESS_PAYLOAD_SIZE, ADDRESS_SIZE, ADDRESS_VERSION};
use crate::error::{PrimitiveError, PrimitiveResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// The length of `UInt160` values in bytes.
pub const UINT160_SIZE: usize = ADDRESS_SIZE;

/// A 160-bit script hash.
///
/// Bytes are stored little-endian, exactly as they appear in serialized
/// transactions and scripts. The textual form (`0x...`) is big-endian.
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct UInt160([u8; UINT160_SIZE]);

impl UInt160 {
    /// Alias matching `UInt160.Length`.
    pub const LENGTH: usize = UINT160_SIZE;

    /// Returns a zero `UInt160`.
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; UINT160_SIZE])
    }

    /// Wraps little-endian bytes; usable in constants.
    #[inline]
    #[must_use]
    pub const fn from_array(bytes: [u8; UINT160_SIZE]) -> Self {
        Self(bytes)
    }

    /// Checks if every byte is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// Creates a `UInt160` from little-endian bytes.
    ///
    /// # Errors
    ///
    /// Returns `PrimitiveError::InvalidFormat` if the input is not exactly 20 bytes.
    pub fn from_bytes(value: &[u8]) -> PrimitiveResult<Self> {
        let bytes: [u8; UINT160_SIZE] = value.try_into().map_err(|_| {
            PrimitiveError::invalid_format(format!("Invalid UInt160 length: {}", value.len()))
        })?;
        Ok(Self(bytes))
    }

    /// Little-endian byte representation.
    #[inline]
    #[must_use]
    pub const fn to_array(&self) -> [u8; UINT160_SIZE] {
        self.0
    }

    /// Borrowed little-endian bytes.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Parses a `UInt160` from a big-endian hexadecimal string, with or without `0x`.
    ///
    /// # Errors
    ///
    /// Returns `PrimitiveError::InvalidFormat` if the string is not 40 hex characters.
    pub fn parse(s: &str) -> PrimitiveResult<Self> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if digits.len() != UINT160_SIZE * 2 {
            return Err(PrimitiveError::invalid_format(format!(
                "UInt160 must be {} hex characters, got {}",
                UINT160_SIZE * 2,
                digits.len()
            )));
        }

        let mut bytes = hex::decode(digits)
            .map_err(|e| PrimitiveError::invalid_format(format!("Invalid UInt160 hex: {e}")))?;
        bytes.reverse();
        Self::from_bytes(&bytes)
    }

    /// Big-endian `0x`-prefixed hex string.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        let mut bytes = self.0;
        bytes.reverse();
        format!("0x{}", hex::encode(bytes))
    }

    /// Encodes this script hash as a base58check address with the default N3 version.
    #[must_use]
    pub fn to_address(&self) -> String {
        self.to_address_with_version(ADDRESS_VERSION)
    }

    /// Encodes this script hash as a base58check address.
    #[must_use]
    pub fn to_address_with_version(&self, version: u8) -> String {
        let mut data = Vec::with_capacity(ADDRESS_PAYLOAD_SIZE);
        data.push(version);
        data.extend_from_slice(&self.0);
        let checksum = address_checksum(&data);
        data.extend_from_slice(&checksum);
        bs58::encode(data).into_string()
    }

    /// Decodes a base58check address with the default N3 version.
    pub fn from_address(address: &str) -> PrimitiveResult<Self> {
        Self::from_address_with_version(address, ADDRESS_VERSION)
    }

    /// Decodes a base58check address, checking version byte and checksum.
    pub fn from_address_with_version(address: &str, version: u8) -> PrimitiveResult<Self> {
        let decoded = bs58::decode(address.trim())
            .into_vec()
            .map_err(|_| PrimitiveError::invalid_format("Invalid Base58 address"))?;

        if decoded.len() != ADDRESS_PAYLOAD_SIZE {
            return Err(PrimitiveError::invalid_format(format!(
                "Invalid address length: {}",
                decoded.len()
            )));
        }

        let (data, checksum) = decoded.split_at(1 + UINT160_SIZE);
        if checksum != address_checksum(data) {
            return Err(PrimitiveError::InvalidChecksum {
                address: address.to_string(),
            });
        }

        if data[0] != version {
            return Err(PrimitiveError::AddressVersion {
                expected: version,
                actual: data[0],
            });
        }

        Self::from_bytes(&data[1..])
    }

    /// Accepts either a `0x` hex script hash or a base58 address.
    pub fn parse_hash_or_address(value: &str, version: u8) -> PrimitiveResult<Self> {
        let trimmed = value.trim();
        if trimmed.starts_with("0x") || trimmed.starts_with("0X") {
            Self::parse(trimmed)
        } else {
            Self::from_address_with_version(trimmed, version)
        }
    }
}

fn address_checksum(data: &[u8]) -> [u8; 4] {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    let mut checksum = [0u8; 4];
    checksum.copy_from_slice(&second[..4]);
    checksum
}

impl FromStr for UInt160 {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for UInt160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl fmt::Debug for UInt160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UInt160({})", self.to_hex_string())
    }
}

impl From<[u8; UINT160_SIZE]> for UInt160 {
    fn from(data: [u8; UINT160_SIZE]) -> Self {
        Self(data)
    }
}

impl TryFrom<&[u8]> for UInt160 {
    type Error = PrimitiveError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(data)
    }
}

impl AsRef<[u8]> for UInt160 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for UInt160 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for UInt160 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(serde::de::Error::custom)
    }
}
