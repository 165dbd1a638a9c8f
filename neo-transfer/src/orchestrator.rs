use std::sync::Arc;

use neo_config::TransferSettings;
use neo_primitives::UInt256;
use tracing::{info, warn};

use crate::balance::{BalanceCheck, BalanceValidator};
use crate::builder::TransactionBuilder;
use crate::error::{BuildError, TransferError, TransferResult};
use crate::estimator::FeeEstimator;
use crate::fee::{format_gas, format_units};
use crate::intent::TransferIntent;
use crate::node::NodeRpc;
use crate::signer::TransactionSigner;
use crate::token::{TokenInfo, TokenResolver};

/// What was submitted, for callers that want more than the hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferReceipt {
    pub hash: UInt256,
    pub network_fee: i64,
    pub system_fee: i64,
    pub valid_until_block: u32,
    pub token: TokenInfo,
    pub balance_check: BalanceCheck,
}

/// Runs build, token check, both fee stages and the balance check in order,
/// then signs and broadcasts. The first failing stage ends the transfer.
pub struct TransferOrchestrator<N: ?Sized> {
    node: Arc<N>,
    settings: TransferSettings,
    builder: TransactionBuilder<N>,
    resolver: TokenResolver<N>,
    estimator: FeeEstimator<N>,
    validator: BalanceValidator<N>,
}

impl<N: NodeRpc + ?Sized> TransferOrchestrator<N> {
    pub fn new(node: Arc<N>, settings: TransferSettings) -> Self {
        Self {
            builder: TransactionBuilder::new(
                Arc::clone(&node),
                settings.valid_until_block_increment,
            ),
            resolver: TokenResolver::new(Arc::clone(&node)),
            estimator: FeeEstimator::new(Arc::clone(&node), &settings),
            validator: BalanceValidator::new(
                Arc::clone(&node),
                settings.fee_token,
                settings.effective_address_version(),
            ),
            node,
            settings,
        }
    }

    pub fn settings(&self) -> &TransferSettings {
        &self.settings
    }

    /// Submits the transfer and returns the node-assigned hash.
    pub async fn transfer<S>(&self, intent: &TransferIntent, signer: &S) -> TransferResult<UInt256>
    where
        S: TransactionSigner + ?Sized,
    {
        self.transfer_with_receipt(intent, signer)
            .await
            .map(|receipt| receipt.hash)
    }

    pub async fn transfer_with_receipt<S>(
        &self,
        intent: &TransferIntent,
        signer: &S,
    ) -> TransferResult<TransferReceipt>
    where
        S: TransactionSigner + ?Sized,
    {
        if signer.script_hash() != intent.from {
            return Err(BuildError::SignerMismatch {
                signer: signer.script_hash(),
                source_account: intent.from,
            }
            .into());
        }

        let mut unsigned = self.builder.build(intent).await?;
        let token = self.resolver.resolve(&intent.token).await?;
        info!(
            target: "neo::transfer",
            from = %intent.from,
            to = %intent.to,
            amount = %format_units(&intent.amount, token.decimals),
            symbol = %token.symbol,
            valid_until_block = unsigned.valid_until_block(),
            "preparing transfer"
        );

        let network_fee = self
            .estimator
            .estimate_network_fee(&mut unsigned, intent.network_fee_override)
            .await?;
        let system_fee = self
            .estimator
            .estimate_system_fee(&mut unsigned, intent.system_fee_override)
            .await?;
        info!(
            target: "neo::transfer",
            network_fee = %format_gas(network_fee),
            system_fee = %format_gas(system_fee),
            "fees resolved"
        );

        let priced = unsigned
            .into_priced()
            .map_err(|kind| TransferError::FeeUnavailable {
                kind,
                reason: "fee stage did not run".to_string(),
            })?;
        let balance_check = self.validator.validate(&priced, intent).await?;

        let valid_until_block = priced.valid_until_block();
        let signed = priced.sign(signer, intent.network_magic)?;
        let local_hash = signed.hash();
        let raw = signed
            .to_array()
            .map_err(|err| TransferError::Build(BuildError::Transaction(err)))?;

        let hash = self
            .node
            .send_raw_transaction(&raw)
            .await
            .map_err(|err| TransferError::Broadcast {
                code: err.code(),
                reason: err.message().to_string(),
            })?;
        if hash != local_hash {
            warn!(target: "neo::transfer", %hash, %local_hash, "node reported a different hash");
        }
        info!(target: "neo::transfer", %hash, symbol = %token.symbol, "transfer broadcast");

        Ok(TransferReceipt {
            hash,
            network_fee,
            system_fee,
            valid_until_block,
            token,
            balance_check,
        })
    }
}
