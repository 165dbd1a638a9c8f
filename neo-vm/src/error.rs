use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VmError {
    #[error("Integer value exceeds PUSHINT256 capacity")]
    IntegerTooLarge,

    #[error("Syscall API too long: {0} bytes (max 252)")]
    SyscallNameTooLong(usize),

    #[error("Push payload too large: {0} bytes")]
    PayloadTooLarge(usize),
}

pub type VmResult<T> = Result<T, VmError>;
