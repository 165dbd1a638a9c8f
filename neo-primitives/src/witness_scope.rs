//! Witness scopes describing how far a signer's witness reaches.

use crate::error::{PrimitiveError, PrimitiveResult};
use bitflags::bitflags;

bitflags! {
    /// Witness scopes describing how a signer may be used during verification.
    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct WitnessScope: u8 {
        const NONE = 0x00;
        const CALLED_BY_ENTRY = 0x01;
        const CUSTOM_CONTRACTS = 0x10;
        const CUSTOM_GROUPS = 0x20;
        const WITNESS_RULES = 0x40;
        const GLOBAL = 0x80;
    }
}

impl WitnessScope {
    /// Decodes a scope byte, rejecting unknown bits and `Global` combined with anything else.
    pub fn from_byte(value: u8) -> PrimitiveResult<Self> {
        let scopes =
            Self::from_bits(value).ok_or(PrimitiveError::InvalidWitnessScope(value))?;
        if !scopes.is_valid() {
            return Err(PrimitiveError::InvalidWitnessScope(value));
        }
        Ok(scopes)
    }

    pub fn is_valid(self) -> bool {
        if self.contains(Self::GLOBAL) {
            return self == Self::GLOBAL;
        }
        true
    }

    /// Formats the scope the way the JSON-RPC server expects it (`CalledByEntry,CustomContracts`).
    pub fn to_witness_scope_string(self) -> String {
        if self.contains(Self::GLOBAL) {
            return "Global".to_string();
        }
        if self.is_empty() {
            return "None".to_string();
        }
        let mut parts = Vec::new();
        if self.contains(Self::CALLED_BY_ENTRY) {
            parts.push("CalledByEntry");
        }
        if self.contains(Self::CUSTOM_CONTRACTS) {
            parts.push("CustomContracts");
        }
        if self.contains(Self::CUSTOM_GROUPS) {
            parts.push("CustomGroups");
        }
        if self.contains(Self::WITNESS_RULES) {
            parts.push("WitnessRules");
        }
        parts.join(",")
    }

    pub fn from_witness_scope_string(value: &str) -> Option<Self> {
        let mut scopes = WitnessScope::NONE;
        for part in value.split(['|', ',']) {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            match part {
                "None" => {}
                "CalledByEntry" => scopes |= WitnessScope::CALLED_BY_ENTRY,
                "CustomContracts" => scopes |= WitnessScope::CUSTOM_CONTRACTS,
                "CustomGroups" => scopes |= WitnessScope::CUSTOM_GROUPS,
                "WitnessRules" => scopes |= WitnessScope::WITNESS_RULES,
                "Global" => return Some(WitnessScope::GLOBAL),
                _ => return None,
            }
        }
        Some(scopes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_global_scope() {
        assert!(WitnessScope::GLOBAL.is_valid());
        let invalid = WitnessScope::GLOBAL | WitnessScope::CALLED_BY_ENTRY;
        assert!(!invalid.is_valid());
        assert!(WitnessScope::from_byte(invalid.bits()).is_err());
    }

    #[test]
    fn rejects_unknown_bits() {
        assert_eq!(
            WitnessScope::from_byte(0x02),
            Err(PrimitiveError::InvalidWitnessScope(0x02))
        );
    }

    #[test]
    fn scope_strings() {
        let scopes = WitnessScope::CALLED_BY_ENTRY | WitnessScope::CUSTOM_CONTRACTS;
        assert_eq!(
            scopes.to_witness_scope_string(),
            "CalledByEntry,CustomContracts"
        );
        assert_eq!(
            WitnessScope::from_witness_scope_string("CalledByEntry|CustomContracts"),
            Some(scopes)
        );
        assert_eq!(WitnessScope::from_witness_scope_string("Bogus"), None);
    }
}
