//! Error types for primitive parsing.

use thiserror::Error;

/// Errors raised while parsing or converting primitive values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrimitiveError {
    /// Input had the wrong shape (length, characters, prefix).
    #[error("Invalid format: {message}")]
    InvalidFormat {
        /// Error message.
        message: String,
    },

    /// Base58 address failed its checksum.
    #[error("Invalid address checksum: {address}")]
    InvalidChecksum {
        /// Offending address.
        address: String,
    },

    /// Address was encoded for a different network version.
    #[error("Unexpected address version {actual:#04x}, expected {expected:#04x}")]
    AddressVersion {
        /// Version byte the caller expected.
        expected: u8,
        /// Version byte found in the address.
        actual: u8,
    },

    /// Witness scope byte contains unknown or conflicting flags.
    #[error("Invalid witness scope: {0:#04x}")]
    InvalidWitnessScope(u8),
}

impl PrimitiveError {
    /// Create an invalid format error.
    pub fn invalid_format<S: Into<String>>(message: S) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }
}

/// Result type for primitive operations.
pub type PrimitiveResult<T> = std::result::Result<T, PrimitiveError>;
