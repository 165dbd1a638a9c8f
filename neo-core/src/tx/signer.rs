use neo_primitives::{UInt160, WitnessScope};
use serde_json::{json, Value};

use crate::error::{CoreError, CoreResult};
use crate::io::{BinEncoder, BinaryWriter};

pub const MAX_ALLOWED_CONTRACTS: usize = 16;

/// An account authorizing a transaction, with the reach of its witness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signer {
    pub account: UInt160,
    pub scopes: WitnessScope,
    pub allowed_contracts: Vec<UInt160>,
}

impl Signer {
    pub fn called_by_entry(account: UInt160) -> Self {
        Self {
            account,
            scopes: WitnessScope::CALLED_BY_ENTRY,
            allowed_contracts: Vec::new(),
        }
    }

    /// Signer limited to the listed contracts. Duplicates are dropped, order kept.
    pub fn custom_contracts(
        account: UInt160,
        contracts: impl IntoIterator<Item = UInt160>,
    ) -> CoreResult<Self> {
        let mut allowed_contracts: Vec<UInt160> = Vec::new();
        for contract in contracts {
            if !allowed_contracts.contains(&contract) {
                allowed_contracts.push(contract);
            }
        }
        if allowed_contracts.len() > MAX_ALLOWED_CONTRACTS {
            return Err(CoreError::TooManyAllowedContracts(allowed_contracts.len()));
        }
        Ok(Self {
            account,
            scopes: WitnessScope::CUSTOM_CONTRACTS,
            allowed_contracts,
        })
    }

    /// JSON form used by `invokescript` and `invokefunction`.
    pub fn to_json(&self) -> Value {
        let mut value = json!({
            "account": self.account.to_string(),
            "scopes": self.scopes.to_witness_scope_string(),
        });
        if self.scopes.contains(WitnessScope::CUSTOM_CONTRACTS) {
            value["allowedcontracts"] = self
                .allowed_contracts
                .iter()
                .map(|hash| Value::String(hash.to_string()))
                .collect();
        }
        value
    }
}

impl BinEncoder for Signer {
    fn encode_bin(&self, w: &mut BinaryWriter<'_>) {
        self.account.encode_bin(w);
        w.write_u8(self.scopes.bits());
        if self.scopes.contains(WitnessScope::CUSTOM_CONTRACTS) {
            self.allowed_contracts.as_slice().encode_bin(w);
        }
    }

    fn bin_size(&self) -> usize {
        let mut size = self.account.bin_size() + 1;
        if self.scopes.contains(WitnessScope::CUSTOM_CONTRACTS) {
            size += self.allowed_contracts.as_slice().bin_size();
        }
        size
    }
}
