use std::fmt;
use std::str::FromStr;

use base64::{engine::general_purpose, Engine as _};
use num_bigint::BigInt;
use serde_json::{Map, Value};

/// Final state of a VM execution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VmState {
    None,
    Halt,
    Fault,
    Break,
}

impl VmState {
    pub fn is_halt(self) -> bool {
        self == Self::Halt
    }
}

impl FromStr for VmState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NONE" => Ok(Self::None),
            "HALT" => Ok(Self::Halt),
            "FAULT" => Ok(Self::Fault),
            "BREAK" => Ok(Self::Break),
            other => Err(format!("Invalid VM state: {other}")),
        }
    }
}

impl fmt::Display for VmState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "NONE",
            Self::Halt => "HALT",
            Self::Fault => "FAULT",
            Self::Break => "BREAK",
        })
    }
}

/// Result of `invokefunction` / `invokescript`
#[derive(Debug, Clone, PartialEq)]
pub struct RpcInvokeResult {
    /// The script that was invoked, base64
    pub script: String,

    /// VM execution state
    pub state: VmState,

    /// Gas consumed during execution, in datoshi
    pub gas_consumed: i64,

    /// Stack items after execution
    pub stack: Vec<RpcStack>,

    /// Exception message if any
    pub exception: Option<String>,
}

impl RpcInvokeResult {
    pub fn from_json(json: &Map<String, Value>) -> Result<Self, String> {
        let script = json
            .get("script")
            .and_then(Value::as_str)
            .ok_or("Missing or invalid 'script' field")?
            .to_string();

        let state_str = json
            .get("state")
            .and_then(Value::as_str)
            .ok_or("Missing or invalid 'state' field")?;
        let state = VmState::from_str(state_str)?;

        let gas_consumed = match json.get("gasconsumed") {
            Some(Value::String(s)) => s
                .parse::<i64>()
                .map_err(|_| format!("Invalid gas consumed value: {s}"))?,
            Some(Value::Number(n)) => n
                .as_i64()
                .ok_or_else(|| format!("Invalid gas consumed value: {n}"))?,
            _ => return Err("Missing or invalid 'gasconsumed' field".to_string()),
        };

        let exception = json
            .get("exception")
            .and_then(Value::as_str)
            .map(str::to_string);

        let stack = match json.get("stack") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_object)
                .map(RpcStack::from_json)
                .collect::<Result<Vec<_>, _>>()?,
            _ => Vec::new(),
        };

        Ok(Self {
            script,
            state,
            gas_consumed,
            stack,
            exception,
        })
    }
}

/// One item of the result stack
#[derive(Debug, Clone, PartialEq)]
pub struct RpcStack {
    pub item_type: String,
    pub value: Value,
}

impl RpcStack {
    pub fn from_json(json: &Map<String, Value>) -> Result<Self, String> {
        let item_type = json
            .get("type")
            .and_then(Value::as_str)
            .ok_or("Missing or invalid 'type' field")?
            .to_string();
        let value = json.get("value").cloned().unwrap_or(Value::Null);
        Ok(Self { item_type, value })
    }

    /// Integer value of an `Integer` or `Boolean` item.
    pub fn as_integer(&self) -> Option<BigInt> {
        match (self.item_type.as_str(), &self.value) {
            ("Integer", Value::String(s)) => s.parse().ok(),
            ("Integer", Value::Number(n)) => n.as_i64().map(BigInt::from),
            ("Boolean", Value::Bool(b)) => Some(BigInt::from(u8::from(*b))),
            _ => None,
        }
    }

    /// Raw bytes of a `ByteString` or `Buffer` item.
    pub fn as_bytes(&self) -> Option<Vec<u8>> {
        match (self.item_type.as_str(), &self.value) {
            ("ByteString" | "Buffer", Value::String(s)) => general_purpose::STANDARD.decode(s).ok(),
            _ => None,
        }
    }

    pub fn as_utf8(&self) -> Option<String> {
        self.as_bytes().and_then(|bytes| String::from_utf8(bytes).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn parses_halt_result() {
        let result = RpcInvokeResult::from_json(&object(json!({
            "script": "wh8MBnN5bWJvbAwUz3bii9AGLEpHjuNVYQETGfPPpNJBYn1bUg==",
            "state": "HALT",
            "gasconsumed": "984060",
            "exception": null,
            "stack": [{"type": "ByteString", "value": "R0FT"}]
        })))
        .unwrap();
        assert_eq!(result.state, VmState::Halt);
        assert_eq!(result.gas_consumed, 984_060);
        assert_eq!(result.exception, None);
        assert_eq!(result.stack[0].as_utf8().as_deref(), Some("GAS"));
    }

    #[test]
    fn parses_fault_with_exception() {
        let result = RpcInvokeResult::from_json(&object(json!({
            "script": "AA==",
            "state": "FAULT",
            "gasconsumed": "2007570",
            "exception": "Insufficient GAS.",
            "stack": []
        })))
        .unwrap();
        assert_eq!(result.state, VmState::Fault);
        assert_eq!(result.exception.as_deref(), Some("Insufficient GAS."));
    }

    #[test]
    fn rejects_unknown_state() {
        let err = RpcInvokeResult::from_json(&object(json!({
            "script": "AA==", "state": "DONE", "gasconsumed": "0"
        })))
        .unwrap_err();
        assert!(err.contains("DONE"));
    }

    #[test]
    fn integer_stack_items() {
        let item = RpcStack {
            item_type: "Integer".to_string(),
            value: json!("100000000000000000000"),
        };
        assert_eq!(
            item.as_integer(),
            Some("100000000000000000000".parse::<BigInt>().unwrap())
        );
        let wrong = RpcStack {
            item_type: "ByteString".to_string(),
            value: json!("AQ=="),
        };
        assert_eq!(wrong.as_integer(), None);
    }
}
