use std::sync::Arc;

use neo_primitives::UInt160;
use neo_rpc_client::RpcNep17Balances;
use num_bigint::BigInt;
use tracing::{debug, warn};

use crate::error::{TransferError, TransferResult};
use crate::intent::TransferIntent;
use crate::node::NodeRpc;
use crate::transaction::PricedTransaction;

/// Outcome of a balance check that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BalanceCheck {
    Sufficient,
    /// The node has no balance index; the node itself will reject an
    /// unaffordable transaction.
    Skipped { reason: String },
}

pub struct BalanceValidator<N: ?Sized> {
    node: Arc<N>,
    fee_token: UInt160,
    address_version: u8,
}

impl<N: NodeRpc + ?Sized> BalanceValidator<N> {
    pub fn new(node: Arc<N>, fee_token: UInt160, address_version: u8) -> Self {
        Self {
            node,
            fee_token,
            address_version,
        }
    }

    /// Queries fresh balances of the source account and checks both the
    /// token amount and the fees against them.
    pub async fn validate(
        &self,
        tx: &PricedTransaction,
        intent: &TransferIntent,
    ) -> TransferResult<BalanceCheck> {
        let address = intent.from.to_address_with_version(self.address_version);
        let balances = match self.node.get_nep17_balances(&address).await {
            Ok(balances) => balances,
            Err(err) => {
                warn!(
                    target: "neo::transfer",
                    %address,
                    error = %err,
                    "balance query failed, skipping balance check"
                );
                return Ok(BalanceCheck::Skipped {
                    reason: err.to_string(),
                });
            }
        };

        let fees = BigInt::from(tx.network_fee()) + BigInt::from(tx.system_fee());
        check_balances(
            &balances,
            &intent.token,
            &intent.amount,
            &self.fee_token,
            &fees,
        )?;
        debug!(target: "neo::transfer", %address, "balances sufficient");
        Ok(BalanceCheck::Sufficient)
    }
}

/// Token balance must cover `amount`; fee-token balance must cover `fees`,
/// plus `amount` when the token is the fee token. Absent entries count as zero.
pub fn check_balances(
    balances: &RpcNep17Balances,
    token: &UInt160,
    amount: &BigInt,
    fee_token: &UInt160,
    fees: &BigInt,
) -> TransferResult<()> {
    let token_balance = balances.amount_of(token);
    if token_balance < *amount {
        return Err(TransferError::InsufficientFunds {
            asset: *token,
            required: amount.clone(),
            available: token_balance,
        });
    }

    let required = if token == fee_token {
        amount + fees
    } else {
        fees.clone()
    };
    let fee_balance = balances.amount_of(fee_token);
    if fee_balance < required {
        return Err(TransferError::InsufficientGas {
            required,
            available: fee_balance,
        });
    }
    Ok(())
}
