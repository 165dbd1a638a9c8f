use neo_crypto::CryptoError;
use neo_primitives::UInt160;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WalletError {
    #[error("invalid key: {0}")]
    Key(#[from] CryptoError),

    #[error("account {0} is not a signer of the transaction")]
    NotASigner(UInt160),

    #[error("signing failed: {0}")]
    Signing(String),
}

pub type WalletResult<T> = Result<T, WalletError>;
