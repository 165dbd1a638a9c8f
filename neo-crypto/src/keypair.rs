//! secp256r1 key pairs and WIF import/export.

use std::fmt::{self, Debug, Formatter};

use p256::ecdsa::signature::{Signer, Verifier};
use p256::ecdsa::{Signature, SigningKey, VerifyingKey};
use p256::elliptic_curve::rand_core::{CryptoRng, RngCore};
use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::SecretKey;
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::base58::Base58;
use crate::error::{CryptoError, CryptoResult};

pub const KEY_SIZE: usize = 32;

/// Compressed SEC1 public key length.
pub const PUBLIC_KEY_SIZE: usize = 33;

/// r || s, 32 bytes each.
pub const SIGNATURE_SIZE: usize = 64;

const WIF_VERSION: u8 = 0x80;
const WIF_COMPRESSED_FLAG: u8 = 0x01;
const WIF_PAYLOAD_SIZE: usize = 1 + KEY_SIZE + 1;

#[derive(Clone)]
pub struct PrivateKey {
    key: Zeroizing<[u8; KEY_SIZE]>,
}

impl PrivateKey {
    #[inline]
    pub fn new(bytes: [u8; KEY_SIZE]) -> Self {
        Self {
            key: Zeroizing::new(bytes),
        }
    }

    #[inline]
    pub fn from_slice(slice: &[u8]) -> CryptoResult<Self> {
        let bytes: [u8; KEY_SIZE] = slice
            .try_into()
            .map_err(|_| CryptoError::InvalidPrivateKey)?;
        Ok(Self::new(bytes))
    }

    #[inline]
    pub fn as_be_bytes(&self) -> &[u8] {
        self.key.as_slice()
    }
}

impl Debug for PrivateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PrivateKey").field(&"***").finish()
    }
}

impl Eq for PrivateKey {}

impl PartialEq for PrivateKey {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.key.as_slice().ct_eq(other.key.as_slice()).into()
    }
}

/// A secp256r1 key pair with the public key cached in compressed form.
#[derive(Clone)]
pub struct KeyPair {
    private_key: PrivateKey,
    public_key: [u8; PUBLIC_KEY_SIZE],
}

impl KeyPair {
    /// Builds a key pair from a raw 32-byte big-endian private key.
    pub fn from_private_key(bytes: &[u8]) -> CryptoResult<Self> {
        let private_key = PrivateKey::from_slice(bytes)?;
        let secret = SecretKey::from_slice(private_key.as_be_bytes())
            .map_err(|_| CryptoError::InvalidPrivateKey)?;
        let encoded = secret.public_key().to_encoded_point(true);
        let public_key: [u8; PUBLIC_KEY_SIZE] = encoded
            .as_bytes()
            .try_into()
            .map_err(|_| CryptoError::InvalidPublicKey)?;
        Ok(Self {
            private_key,
            public_key,
        })
    }

    pub fn generate<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
        let secret = SecretKey::random(rng);
        let encoded = secret.public_key().to_encoded_point(true);
        let mut public_key = [0u8; PUBLIC_KEY_SIZE];
        public_key.copy_from_slice(encoded.as_bytes());
        Self {
            private_key: PrivateKey::new(secret.to_bytes().into()),
            public_key,
        }
    }

    /// Imports a key from Wallet Import Format (`0x80 || key || 0x01`, base58check).
    pub fn from_wif(wif: &str) -> CryptoResult<Self> {
        let payload = Zeroizing::new(
            Base58::decode_check(wif.trim()).map_err(|_| CryptoError::InvalidWif("bad encoding"))?,
        );
        if payload.len() != WIF_PAYLOAD_SIZE {
            return Err(CryptoError::InvalidWif("unexpected length"));
        }
        if payload[0] != WIF_VERSION || payload[WIF_PAYLOAD_SIZE - 1] != WIF_COMPRESSED_FLAG {
            return Err(CryptoError::InvalidWif("unexpected version or compression flag"));
        }
        Self::from_private_key(&payload[1..1 + KEY_SIZE])
    }

    pub fn to_wif(&self) -> String {
        let mut payload = Zeroizing::new(Vec::with_capacity(WIF_PAYLOAD_SIZE));
        payload.push(WIF_VERSION);
        payload.extend_from_slice(self.private_key.as_be_bytes());
        payload.push(WIF_COMPRESSED_FLAG);
        Base58::encode_check(&payload)
    }

    #[inline]
    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    #[inline]
    pub fn public_key(&self) -> &[u8; PUBLIC_KEY_SIZE] {
        &self.public_key
    }

    /// Signs `message` with ECDSA over SHA-256 (RFC 6979 deterministic nonce).
    pub fn sign(&self, message: &[u8]) -> CryptoResult<[u8; SIGNATURE_SIZE]> {
        let signing_key = SigningKey::from_slice(self.private_key.as_be_bytes())
            .map_err(|_| CryptoError::InvalidPrivateKey)?;
        let signature: Signature = signing_key
            .try_sign(message)
            .map_err(|_| CryptoError::InvalidSignature)?;
        let mut bytes = [0u8; SIGNATURE_SIZE];
        bytes.copy_from_slice(&signature.to_bytes());
        Ok(bytes)
    }

    pub fn verify(&self, message: &[u8], signature: &[u8]) -> CryptoResult<()> {
        let signature =
            Signature::from_slice(signature).map_err(|_| CryptoError::InvalidSignature)?;
        VerifyingKey::from_sec1_bytes(&self.public_key)
            .map_err(|_| CryptoError::InvalidPublicKey)?
            .verify(message, &signature)
            .map_err(|_| CryptoError::InvalidSignature)
    }
}

impl Debug for KeyPair {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &hex::encode(self.public_key))
            .finish_non_exhaustive()
    }
}
