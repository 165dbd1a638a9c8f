//! Network and system fee stages.

use std::sync::Arc;

use neo_config::TransferSettings;
use neo_core::Signer;
use tracing::{debug, warn};

use crate::error::{TransferError, TransferResult};
use crate::fee::{format_gas, network_fee_minimum, FeeKind, FeeQuote};
use crate::fee_policy::FeePolicyOracle;
use crate::node::NodeRpc;
use crate::transaction::UnsignedTransaction;

pub struct FeeEstimator<N: ?Sized> {
    node: Arc<N>,
    policy: FeePolicyOracle<N>,
    witness_overhead: i64,
    witness_verification_fee: i64,
}

impl<N: NodeRpc + ?Sized> FeeEstimator<N> {
    pub fn new(node: Arc<N>, settings: &TransferSettings) -> Self {
        Self {
            policy: FeePolicyOracle::new(Arc::clone(&node)),
            node,
            witness_overhead: settings.witness_overhead,
            witness_verification_fee: settings.witness_verification_fee,
        }
    }

    /// Prices the serialized size plus one single-signature witness and writes
    /// the resolved fee into `tx`.
    pub async fn estimate_network_fee(
        &self,
        tx: &mut UnsignedTransaction,
        user_override: i64,
    ) -> TransferResult<i64> {
        let fee = match self.policy.fee_per_byte().await {
            Ok(fee_per_byte) => {
                let size = tx.unsigned_size();
                let minimum = network_fee_minimum(
                    fee_per_byte,
                    size,
                    self.witness_overhead,
                    self.witness_verification_fee,
                )
                .ok_or(TransferError::FeeOverflow {
                    kind: FeeKind::Network,
                })?;
                let quote = FeeQuote::new(FeeKind::Network, minimum, user_override);
                debug!(
                    target: "neo::transfer",
                    fee_per_byte,
                    size,
                    minimum,
                    user_override,
                    "network fee quote"
                );
                quote.resolve()
            }
            Err(reason) => fallback(FeeKind::Network, user_override, reason)?,
        };

        tx.set_network_fee(fee);
        debug!(target: "neo::transfer", fee = %format_gas(fee), "network fee set");
        Ok(fee)
    }

    /// Dry-runs the script as the sender and prices the gas it consumed.
    ///
    /// A script that does not halt is fatal whatever the override says.
    pub async fn estimate_system_fee(
        &self,
        tx: &mut UnsignedTransaction,
        user_override: i64,
    ) -> TransferResult<i64> {
        let signers: Vec<Signer> = tx.sender().map(Signer::called_by_entry).into_iter().collect();

        let fee = match self.node.invoke_script(tx.script(), &signers).await {
            Ok(result) if result.state.is_halt() => {
                let quote = FeeQuote::new(FeeKind::System, result.gas_consumed, user_override);
                debug!(
                    target: "neo::transfer",
                    gas_consumed = result.gas_consumed,
                    user_override,
                    "system fee quote"
                );
                quote.resolve()
            }
            Ok(result) => {
                return Err(TransferError::ScriptExecution {
                    state: result.state,
                    exception: result.exception,
                    gas_consumed: result.gas_consumed,
                });
            }
            Err(err) => fallback(FeeKind::System, user_override, err.to_string())?,
        };

        tx.set_system_fee(fee);
        debug!(target: "neo::transfer", fee = %format_gas(fee), "system fee set");
        Ok(fee)
    }
}

/// Without a node-computed minimum only an explicit override can stand in.
fn fallback(kind: FeeKind, user_override: i64, reason: String) -> TransferResult<i64> {
    if user_override > 0 {
        warn!(
            target: "neo::transfer",
            %kind,
            user_override,
            %reason,
            "fee query failed, using override"
        );
        Ok(user_override)
    } else {
        Err(TransferError::FeeUnavailable { kind, reason })
    }
}
