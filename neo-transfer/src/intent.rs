use neo_primitives::UInt160;
use neo_vm::ContractParameter;
use num_bigint::BigInt;

use crate::error::BuildError;

/// What to transfer, from whom, to whom. Never mutated by the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferIntent {
    pub from: UInt160,
    pub to: UInt160,
    pub token: UInt160,
    /// Amount in the token's smallest unit.
    pub amount: BigInt,
    /// `data` argument forwarded to `onNEP17Payment`.
    pub data: Option<ContractParameter>,
    /// Contracts the witness must additionally be valid for.
    pub extra_allowed_contracts: Vec<UInt160>,
    /// Zero means no override.
    pub network_fee_override: i64,
    /// Zero means no override.
    pub system_fee_override: i64,
    pub network_magic: u32,
}

impl TransferIntent {
    pub fn new(
        from: UInt160,
        to: UInt160,
        token: UInt160,
        amount: impl Into<BigInt>,
        network_magic: u32,
    ) -> Self {
        Self {
            from,
            to,
            token,
            amount: amount.into(),
            data: None,
            extra_allowed_contracts: Vec::new(),
            network_fee_override: 0,
            system_fee_override: 0,
            network_magic,
        }
    }

    #[must_use]
    pub fn with_data(mut self, data: ContractParameter) -> Self {
        self.data = Some(data);
        self
    }

    #[must_use]
    pub fn allow_contract(mut self, contract: UInt160) -> Self {
        self.extra_allowed_contracts.push(contract);
        self
    }

    #[must_use]
    pub fn with_network_fee(mut self, fee: i64) -> Self {
        self.network_fee_override = fee;
        self
    }

    #[must_use]
    pub fn with_system_fee(mut self, fee: i64) -> Self {
        self.system_fee_override = fee;
        self
    }

    /// The `data` argument as pushed into the script; `Any` (null) when absent.
    pub fn data_argument(&self) -> ContractParameter {
        self.data.clone().unwrap_or(ContractParameter::Any)
    }
}

/// Parses an account or contract given as `0x` hex script hash or Neo address.
pub fn parse_identity(
    field: &'static str,
    value: &str,
    address_version: u8,
) -> Result<UInt160, BuildError> {
    UInt160::parse_hash_or_address(value.trim(), address_version).map_err(|err| {
        BuildError::MalformedIdentifier {
            field,
            reason: err.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use neo_primitives::ADDRESS_VERSION;

    #[test]
    fn parses_hash_and_address_forms() {
        let by_hash = parse_identity(
            "to",
            "0x2dc6a732b4550cec07e60f266a08ac474f33cdf9",
            ADDRESS_VERSION,
        )
        .unwrap();
        let by_address =
            parse_identity("to", "NigoG6c4gTJcUVZtpY7fZPcCZaA2WiE12m", ADDRESS_VERSION).unwrap();
        assert_eq!(by_hash, by_address);
    }

    #[test]
    fn malformed_identity_names_the_field() {
        let err = parse_identity("token", "not-a-hash", ADDRESS_VERSION).unwrap_err();
        assert!(matches!(
            err,
            BuildError::MalformedIdentifier { field: "token", .. }
        ));
    }

    #[test]
    fn builders_leave_other_fields_alone() {
        let intent = TransferIntent::new(UInt160::zero(), UInt160::zero(), UInt160::zero(), 5, 7)
            .with_network_fee(10)
            .with_data(ContractParameter::from("memo"));
        assert_eq!(intent.network_fee_override, 10);
        assert_eq!(intent.system_fee_override, 0);
        assert_eq!(intent.data_argument(), ContractParameter::from("memo"));
        assert_eq!(intent.amount, BigInt::from(5));
    }
}
