use std::sync::Arc;

use neo_core::{Signer, Transaction};
use neo_vm::{ContractParameter, ScriptBuilder};
use num_traits::Signed;
use tracing::debug;

use crate::error::BuildError;
use crate::fee::FeeKind;
use crate::intent::TransferIntent;
use crate::node::NodeRpc;
use crate::transaction::UnsignedTransaction;

/// Turns a [`TransferIntent`] into an [`UnsignedTransaction`].
pub struct TransactionBuilder<N: ?Sized> {
    node: Arc<N>,
    horizon: u32,
}

impl<N: NodeRpc + ?Sized> TransactionBuilder<N> {
    /// `horizon` is the number of blocks the transaction stays valid for.
    pub fn new(node: Arc<N>, horizon: u32) -> Self {
        Self { node, horizon }
    }

    pub fn horizon(&self) -> u32 {
        self.horizon
    }

    /// Validates the intent, then asks the node for the height.
    ///
    /// Nothing is sent to the node when the intent itself is invalid.
    pub async fn build(&self, intent: &TransferIntent) -> Result<UnsignedTransaction, BuildError> {
        validate(intent)?;
        let script = transfer_script(intent)?;
        let signer = transfer_signer(intent)?;

        let block_count = self
            .node
            .get_block_count()
            .await
            .map_err(|err| BuildError::BlockCount(err.to_string()))?;

        assemble(script, signer, block_count, self.horizon, Transaction::random_nonce())
    }
}

/// Rejects intents no node would accept, before any RPC.
pub fn validate(intent: &TransferIntent) -> Result<(), BuildError> {
    if !intent.amount.is_positive() {
        return Err(BuildError::NonPositiveAmount(intent.amount.clone()));
    }
    // The zero hash is never a usable account or contract.
    for (field, hash) in [
        ("token", &intent.token),
        ("from", &intent.from),
        ("to", &intent.to),
    ] {
        if hash.is_zero() {
            return Err(BuildError::MalformedIdentifier {
                field,
                reason: "zero script hash".to_string(),
            });
        }
    }
    for (kind, value) in [
        (FeeKind::Network, intent.network_fee_override),
        (FeeKind::System, intent.system_fee_override),
    ] {
        if value < 0 {
            return Err(BuildError::NegativeOverride { kind, value });
        }
    }
    Ok(())
}

/// `token.transfer(from, to, amount, data)` through `System.Contract.Call`.
pub fn transfer_script(intent: &TransferIntent) -> Result<Vec<u8>, BuildError> {
    let args = [
        ContractParameter::Hash160(intent.from),
        ContractParameter::Hash160(intent.to),
        ContractParameter::Integer(intent.amount.clone()),
        intent.data_argument(),
    ];
    Ok(ScriptBuilder::create_contract_call(
        &intent.token,
        "transfer",
        &args,
    )?)
}

/// The source account, scoped to the token, the destination and any extras.
pub fn transfer_signer(intent: &TransferIntent) -> Result<Signer, BuildError> {
    let contracts = [intent.token, intent.to]
        .into_iter()
        .chain(intent.extra_allowed_contracts.iter().copied());
    Ok(Signer::custom_contracts(intent.from, contracts)?)
}

pub(crate) fn assemble(
    script: Vec<u8>,
    signer: Signer,
    block_count: u32,
    horizon: u32,
    nonce: u32,
) -> Result<UnsignedTransaction, BuildError> {
    let valid_until_block =
        block_count
            .checked_add(horizon)
            .ok_or(BuildError::ValidityOverflow {
                height: block_count,
                horizon,
            })?;

    let tx = Transaction::new(nonce, valid_until_block, vec![signer], script)?;
    debug!(
        target: "neo::transfer",
        block_count,
        valid_until_block,
        nonce,
        size = tx.unsigned_size(),
        "built unsigned transaction"
    );
    Ok(UnsignedTransaction::new(tx))
}
