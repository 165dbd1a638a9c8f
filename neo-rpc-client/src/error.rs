use thiserror::Error;

/// JSON-RPC "internal error", also used for local transport and decoding failures.
pub const INTERNAL_ERROR: i32 = -32603;

/// JSON-RPC "parse error".
pub const PARSE_ERROR: i32 = -32700;

/// Error returned by the node or raised while talking to it.
///
/// Node-reported errors keep the node's code and message; transport and
/// decoding failures use [`INTERNAL_ERROR`] or [`PARSE_ERROR`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("RPC error {code}: {message}")]
pub struct ClientRpcError {
    code: i32,
    message: String,
}

impl ClientRpcError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(INTERNAL_ERROR, message)
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
