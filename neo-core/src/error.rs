use neo_primitives::PrimitiveError;
use thiserror::Error;

/// Errors raised while assembling or encoding transactions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Transaction has no signers")]
    NoSigners,

    #[error("Transaction script is empty")]
    EmptyScript,

    #[error("Signer allows {0} contracts, at most 16 are permitted")]
    TooManyAllowedContracts(usize),

    #[error("Witness count {witnesses} does not match signer count {signers}")]
    WitnessCountMismatch { signers: usize, witnesses: usize },

    #[error("Transaction size {size} exceeds maximum {max}")]
    TooLarge { size: usize, max: usize },

    #[error(transparent)]
    Primitive(#[from] PrimitiveError),
}

pub type CoreResult<T> = Result<T, CoreError>;
