use neo_core::CoreError;
use neo_primitives::UInt160;
use neo_rpc_client::VmState;
use neo_vm::VmError;
use num_bigint::BigInt;
use thiserror::Error;

use crate::fee::FeeKind;

/// Failures while assembling the unsigned transaction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("transfer amount must be positive, got {0}")]
    NonPositiveAmount(BigInt),

    #[error("{kind} fee override must not be negative, got {value}")]
    NegativeOverride { kind: FeeKind, value: i64 },

    #[error("malformed {field}: {reason}")]
    MalformedIdentifier { field: &'static str, reason: String },

    #[error("signer {signer} does not control source account {source_account}")]
    SignerMismatch {
        signer: UInt160,
        source_account: UInt160,
    },

    #[error("block count query failed: {0}")]
    BlockCount(String),

    #[error("validity window overflows: height {height} + horizon {horizon}")]
    ValidityOverflow { height: u32, horizon: u32 },

    #[error("script encoding failed: {0}")]
    Script(#[from] VmError),

    #[error(transparent)]
    Transaction(#[from] CoreError),
}

/// Terminal pipeline errors. Nothing is retried internally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    #[error("failed to build transaction: {0}")]
    Build(#[from] BuildError),

    #[error("token {token} not found: {reason}")]
    TokenNotFound { token: UInt160, reason: String },

    #[error("unable to determine {kind} fee: {reason}")]
    FeeUnavailable { kind: FeeKind, reason: String },

    #[error("{kind} fee computation overflowed")]
    FeeOverflow { kind: FeeKind },

    #[error("transfer script ended in {state}: {}", exception.as_deref().unwrap_or("no exception reported"))]
    ScriptExecution {
        state: VmState,
        exception: Option<String>,
        gas_consumed: i64,
    },

    #[error("insufficient funds of {asset}: required {required}, available {available}")]
    InsufficientFunds {
        asset: UInt160,
        required: BigInt,
        available: BigInt,
    },

    #[error("insufficient GAS for fees: required {required}, available {available}")]
    InsufficientGas { required: BigInt, available: BigInt },

    #[error("signing failed: {0}")]
    Signing(String),

    #[error("node rejected transaction ({code}): {reason}")]
    Broadcast { code: i32, reason: String },
}

pub type TransferResult<T> = Result<T, TransferError>;
