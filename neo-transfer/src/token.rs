use std::sync::Arc;

use neo_primitives::UInt160;
use num_traits::ToPrimitive;
use tracing::{debug, warn};

use crate::error::{TransferError, TransferResult};
use crate::node::NodeRpc;

/// A token contract that answered `symbol`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenInfo {
    pub hash: UInt160,
    pub symbol: String,
    pub decimals: u8,
}

/// Confirms the token contract exists before any fee work is done.
pub struct TokenResolver<N: ?Sized> {
    node: Arc<N>,
}

impl<N: NodeRpc + ?Sized> TokenResolver<N> {
    pub fn new(node: Arc<N>) -> Self {
        Self { node }
    }

    /// `symbol` must halt with a string. A failing `decimals` only degrades
    /// display precision to 0.
    pub async fn resolve(&self, token: &UInt160) -> TransferResult<TokenInfo> {
        let not_found = |reason: String| TransferError::TokenNotFound {
            token: *token,
            reason,
        };

        let result = self
            .node
            .invoke_function(token, "symbol", &[])
            .await
            .map_err(|err| not_found(err.to_string()))?;
        if !result.state.is_halt() {
            return Err(not_found(format!(
                "symbol ended in {}: {}",
                result.state,
                result.exception.as_deref().unwrap_or("no exception reported")
            )));
        }
        let symbol = result
            .stack
            .first()
            .and_then(|item| item.as_utf8())
            .ok_or_else(|| not_found("symbol returned no string".to_string()))?;

        let decimals = match self.node.invoke_function(token, "decimals", &[]).await {
            Ok(result) if result.state.is_halt() => result
                .stack
                .first()
                .and_then(|item| item.as_integer())
                .and_then(|value| value.to_u8()),
            Ok(result) => {
                warn!(target: "neo::transfer", %token, state = %result.state, "decimals did not halt");
                None
            }
            Err(err) => {
                warn!(target: "neo::transfer", %token, error = %err, "decimals query failed");
                None
            }
        }
        .unwrap_or(0);

        debug!(target: "neo::transfer", %token, %symbol, decimals, "resolved token");
        Ok(TokenInfo {
            hash: *token,
            symbol,
            decimals,
        })
    }
}
