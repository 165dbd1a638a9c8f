//! Cryptographic primitives used to sign Neo N3 transactions.
//!
//! - [`Crypto`]: SHA-256, RIPEMD-160, Hash160 and Hash256
//! - [`Base58`]: base58check encoding used by WIF and addresses
//! - [`KeyPair`]: secp256r1 keys, WIF import and ECDSA signing

pub mod base58;
pub mod error;
pub mod hash;
pub mod keypair;

pub use base58::Base58;
pub use error::{CryptoError, CryptoResult};
pub use hash::Crypto;
pub use keypair::{KeyPair, PrivateKey, PUBLIC_KEY_SIZE, SIGNATURE_SIZE};
