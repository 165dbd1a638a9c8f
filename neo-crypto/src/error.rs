use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CryptoError {
    #[error("ecc256: invalid private key")]
    InvalidPrivateKey,

    #[error("ecc256: invalid public key encoding")]
    InvalidPublicKey,

    #[error("ecdsa: invalid signature")]
    InvalidSignature,

    #[error("base58: {0}")]
    Base58(String),

    #[error("wif: {0}")]
    InvalidWif(&'static str),
}

pub type CryptoResult<T> = Result<T, CryptoError>;
