use std::sync::Arc;

use neo_core::NativeContract;
use num_traits::ToPrimitive;

use crate::node::NodeRpc;

/// Reads the Policy contract's current fee-per-byte.
pub struct FeePolicyOracle<N: ?Sized> {
    node: Arc<N>,
}

impl<N: NodeRpc + ?Sized> FeePolicyOracle<N> {
    pub fn new(node: Arc<N>) -> Self {
        Self { node }
    }

    /// Datoshi per byte. The error is a human readable reason.
    pub async fn fee_per_byte(&self) -> Result<i64, String> {
        let result = self
            .node
            .invoke_function(&NativeContract::Policy.hash(), "getFeePerByte", &[])
            .await
            .map_err(|err| err.to_string())?;
        if !result.state.is_halt() {
            return Err(format!(
                "getFeePerByte ended in {}: {}",
                result.state,
                result.exception.as_deref().unwrap_or("no exception reported")
            ));
        }
        result
            .stack
            .first()
            .and_then(|item| item.as_integer())
            .and_then(|value| value.to_i64())
            .filter(|value| *value >= 0)
            .ok_or_else(|| "getFeePerByte returned no usable integer".to_string())
    }
}
