//! Typed contract arguments.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use neo_primitives::UInt160;
use num_bigint::BigInt;
use serde_json::{json, Value};
use std::fmt;

/// Argument passed to a contract method, either in a script or over RPC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractParameter {
    Any,
    Boolean(bool),
    Integer(BigInt),
    ByteArray(Vec<u8>),
    String(String),
    Hash160(UInt160),
    Array(Vec<ContractParameter>),
}

impl ContractParameter {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Any => "Any",
            Self::Boolean(_) => "Boolean",
            Self::Integer(_) => "Integer",
            Self::ByteArray(_) => "ByteArray",
            Self::String(_) => "String",
            Self::Hash160(_) => "Hash160",
            Self::Array(_) => "Array",
        }
    }

    /// JSON form accepted by `invokefunction`.
    pub fn to_json(&self) -> Value {
        let value = match self {
            Self::Any => Value::Null,
            Self::Boolean(b) => Value::Bool(*b),
            Self::Integer(i) => Value::String(i.to_string()),
            Self::ByteArray(bytes) => Value::String(STANDARD.encode(bytes)),
            Self::String(s) => Value::String(s.clone()),
            Self::Hash160(hash) => Value::String(hash.to_string()),
            Self::Array(items) => Value::Array(items.iter().map(Self::to_json).collect()),
        };
        json!({ "type": self.type_name(), "value": value })
    }
}

impl fmt::Display for ContractParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

impl From<bool> for ContractParameter {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<BigInt> for ContractParameter {
    fn from(value: BigInt) -> Self {
        Self::Integer(value)
    }
}

impl From<i64> for ContractParameter {
    fn from(value: i64) -> Self {
        Self::Integer(BigInt::from(value))
    }
}

impl From<&str> for ContractParameter {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<UInt160> for ContractParameter {
    fn from(value: UInt160) -> Self {
        Self::Hash160(value)
    }
}
