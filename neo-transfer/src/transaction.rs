//! The in-progress transaction and its priced form.
//!
//! Fees start unset. Only an [`UnsignedTransaction`] with both fees set can be
//! turned into a [`PricedTransaction`], and only a priced transaction can be
//! signed, so nothing reaches the node with a missing fee.

use neo_core::Transaction;
use neo_primitives::UInt160;

use crate::error::TransferResult;
use crate::fee::FeeKind;
use crate::signer::TransactionSigner;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsignedTransaction {
    tx: Transaction,
    network_fee: Option<i64>,
    system_fee: Option<i64>,
}

impl UnsignedTransaction {
    pub(crate) fn new(tx: Transaction) -> Self {
        Self {
            tx,
            network_fee: None,
            system_fee: None,
        }
    }

    pub fn transaction(&self) -> &Transaction {
        &self.tx
    }

    pub fn script(&self) -> &[u8] {
        self.tx.script()
    }

    /// The source account; the builder always puts it first.
    pub fn sender(&self) -> Option<UInt160> {
        self.tx.sender()
    }

    pub fn valid_until_block(&self) -> u32 {
        self.tx.valid_until_block()
    }

    /// Serialized size without witnesses. Fee values do not affect it.
    pub fn unsigned_size(&self) -> usize {
        self.tx.unsigned_size()
    }

    pub fn network_fee(&self) -> Option<i64> {
        self.network_fee
    }

    pub fn system_fee(&self) -> Option<i64> {
        self.system_fee
    }

    pub(crate) fn set_network_fee(&mut self, fee: i64) {
        self.tx.set_network_fee(fee);
        self.network_fee = Some(fee);
    }

    pub(crate) fn set_system_fee(&mut self, fee: i64) {
        self.tx.set_system_fee(fee);
        self.system_fee = Some(fee);
    }

    /// Fails with the first fee kind still unset.
    pub fn into_priced(self) -> Result<PricedTransaction, FeeKind> {
        let network_fee = self.network_fee.ok_or(FeeKind::Network)?;
        let system_fee = self.system_fee.ok_or(FeeKind::System)?;
        Ok(PricedTransaction {
            tx: self.tx,
            network_fee,
            system_fee,
        })
    }
}

/// A transaction whose fees are final and covered by its hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedTransaction {
    tx: Transaction,
    network_fee: i64,
    system_fee: i64,
}

impl PricedTransaction {
    pub fn transaction(&self) -> &Transaction {
        &self.tx
    }

    pub fn network_fee(&self) -> i64 {
        self.network_fee
    }

    pub fn system_fee(&self) -> i64 {
        self.system_fee
    }

    pub fn valid_until_block(&self) -> u32 {
        self.tx.valid_until_block()
    }

    pub fn sign<S>(self, signer: &S, network: u32) -> TransferResult<Transaction>
    where
        S: TransactionSigner + ?Sized,
    {
        signer.sign(self.tx, network)
    }
}
