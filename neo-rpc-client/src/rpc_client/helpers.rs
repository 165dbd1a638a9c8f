use serde_json::{Map, Value};

use crate::ClientRpcError;

pub(super) fn token_as_object(
    value: Value,
    method: &str,
) -> Result<Map<String, Value>, ClientRpcError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(ClientRpcError::internal(format!(
            "{method} returned {other}, expected an object"
        ))),
    }
}

pub(super) fn token_as_u32(value: Value, method: &str) -> Result<u32, ClientRpcError> {
    value
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| {
            ClientRpcError::internal(format!("{method} returned {value}, expected a u32"))
        })
}
