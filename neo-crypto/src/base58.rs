//! Base58check encoding (base58 with a 4-byte Hash256 checksum).

use crate::error::{CryptoError, CryptoResult};
use crate::hash::Crypto;

/// Base58 encoding/decoding utilities
pub struct Base58;

impl Base58 {
    /// Encodes data to Base58Check string (Base58 with 4-byte checksum).
    pub fn encode_check(data: &[u8]) -> String {
        let mut payload = Vec::with_capacity(data.len() + 4);
        payload.extend_from_slice(data);
        let checksum = Crypto::hash256(data);
        payload.extend_from_slice(&checksum[..4]);
        bs58::encode(payload).into_string()
    }

    /// Decodes Base58Check string back to bytes, verifying the checksum.
    pub fn decode_check(s: &str) -> CryptoResult<Vec<u8>> {
        let bytes = bs58::decode(s)
            .into_vec()
            .map_err(|e| CryptoError::Base58(format!("decode error: {e}")))?;

        if bytes.len() < 4 {
            return Err(CryptoError::Base58("payload too short".to_string()));
        }

        let (payload, checksum) = bytes.split_at(bytes.len() - 4);
        let expected = Crypto::hash256(payload);
        if checksum != &expected[..4] {
            return Err(CryptoError::Base58("checksum mismatch".to_string()));
        }

        Ok(payload.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_check_detects_tampering() {
        let encoded = Base58::encode_check(b"neo transfer");
        assert_eq!(Base58::decode_check(&encoded).unwrap(), b"neo transfer");

        let mut tampered = encoded.into_bytes();
        tampered[0] = if tampered[0] == b'2' { b'3' } else { b'2' };
        let tampered = String::from_utf8(tampered).unwrap();
        assert!(Base58::decode_check(&tampered).is_err());
    }
}
