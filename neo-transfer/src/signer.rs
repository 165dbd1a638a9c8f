use neo_core::Transaction;
use neo_primitives::UInt160;
use neo_wallet::Account;

use crate::error::{TransferError, TransferResult};

/// Something that can witness a transaction for one account.
pub trait TransactionSigner: Send + Sync {
    fn script_hash(&self) -> UInt160;

    /// Returns `tx` with this account's witness appended.
    fn sign(&self, tx: Transaction, network: u32) -> TransferResult<Transaction>;
}

impl TransactionSigner for Account {
    fn script_hash(&self) -> UInt160 {
        Account::script_hash(self)
    }

    fn sign(&self, mut tx: Transaction, network: u32) -> TransferResult<Transaction> {
        let witness = self
            .sign_transaction(&tx, network)
            .map_err(|err| TransferError::Signing(err.to_string()))?;
        tx.add_witness(witness);
        Ok(tx)
    }
}
