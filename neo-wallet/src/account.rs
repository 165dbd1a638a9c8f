use neo_core::contract::{
    signature_invocation_script, signature_redeem_script, to_script_hash,
};
use neo_core::{Transaction, Witness};
use neo_crypto::KeyPair;
use neo_primitives::{UInt160, ADDRESS_VERSION};
use tracing::debug;

use crate::error::{WalletError, WalletResult};

/// A single-signature account backed by a secp256r1 key.
#[derive(Clone, Debug)]
pub struct Account {
    key_pair: KeyPair,
    verification_script: Vec<u8>,
    script_hash: UInt160,
    address_version: u8,
}

impl Account {
    pub fn from_key_pair(key_pair: KeyPair, address_version: u8) -> Self {
        let verification_script = signature_redeem_script(key_pair.public_key());
        let script_hash = to_script_hash(&verification_script);
        Self {
            key_pair,
            verification_script,
            script_hash,
            address_version,
        }
    }

    /// Imports an account from a WIF string using the N3 address version.
    pub fn from_wif(wif: &str) -> WalletResult<Self> {
        Self::from_wif_with_version(wif, ADDRESS_VERSION)
    }

    pub fn from_wif_with_version(wif: &str, address_version: u8) -> WalletResult<Self> {
        let key_pair = KeyPair::from_wif(wif)?;
        Ok(Self::from_key_pair(key_pair, address_version))
    }

    pub fn script_hash(&self) -> UInt160 {
        self.script_hash
    }

    pub fn address(&self) -> String {
        self.script_hash.to_address_with_version(self.address_version)
    }

    pub fn public_key(&self) -> &[u8] {
        self.key_pair.public_key()
    }

    pub fn verification_script(&self) -> &[u8] {
        &self.verification_script
    }

    /// Produces this account's witness for `tx` under `network`.
    ///
    /// The transaction's fees must already be final: they are covered by the hash.
    pub fn sign_transaction(&self, tx: &Transaction, network: u32) -> WalletResult<Witness> {
        if !tx
            .signers()
            .iter()
            .any(|signer| signer.account == self.script_hash)
        {
            return Err(WalletError::NotASigner(self.script_hash));
        }
        let sign_data = tx.get_sign_data(network);
        let signature = self.key_pair.sign(&sign_data)?;
        debug!(account = %self.script_hash, tx = %tx.hash(), network, "signed transaction");
        Ok(Witness::new(
            signature_invocation_script(&signature),
            self.verification_script.clone(),
        ))
    }

    /// Checks a witness produced by [`Account::sign_transaction`].
    pub fn verify_witness(&self, tx: &Transaction, network: u32, witness: &Witness) -> bool {
        witness.verification_script == self.verification_script
            && witness.invocation_script.len() == 66
            && self
                .key_pair
                .verify(&tx.get_sign_data(network), &witness.invocation_script[2..])
                .is_ok()
    }
}
