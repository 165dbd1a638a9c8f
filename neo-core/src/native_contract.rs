//! Native contracts the transfer pipeline talks to.

use neo_primitives::UInt160;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeContract {
    Neo,
    Gas,
    Policy,
}

impl NativeContract {
    /// 0xef4073a0f2b305a38ec4050e4d3d28bc40ea63f5
    pub const NEO_HASH: UInt160 = UInt160::from_array([
        0xf5, 0x63, 0xea, 0x40, 0xbc, 0x28, 0x3d, 0x4d, 0x0e, 0x05, 0xc4, 0x8e, 0xa3, 0x05, 0xb3,
        0xf2, 0xa0, 0x73, 0x40, 0xef,
    ]);

    /// 0xd2a4cff31913016155e38e474a2c06d08be276cf
    pub const GAS_HASH: UInt160 = UInt160::from_array([
        0xcf, 0x76, 0xe2, 0x8b, 0xd0, 0x06, 0x2c, 0x4a, 0x47, 0x8e, 0xe3, 0x55, 0x61, 0x01, 0x13,
        0x19, 0xf3, 0xcf, 0xa4, 0xd2,
    ]);

    /// 0xcc5e4edd9f5f8dba8bb65734541df7a1c081c67b
    pub const POLICY_HASH: UInt160 = UInt160::from_array([
        0x7b, 0xc6, 0x81, 0xc0, 0xa1, 0xf7, 0x1d, 0x54, 0x34, 0x57, 0xb6, 0x8b, 0xba, 0x8d, 0x5f,
        0x9f, 0xdd, 0x4e, 0x5e, 0xcc,
    ]);

    pub const fn hash(self) -> UInt160 {
        match self {
            Self::Neo => Self::NEO_HASH,
            Self::Gas => Self::GAS_HASH,
            Self::Policy => Self::POLICY_HASH,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Neo => "NeoToken",
            Self::Gas => "GasToken",
            Self::Policy => "PolicyContract",
        }
    }

    pub fn from_hash(hash: &UInt160) -> Option<Self> {
        [Self::Neo, Self::Gas, Self::Policy]
            .into_iter()
            .find(|contract| contract.hash() == *hash)
    }
}
