//! Network type and its protocol constants

use serde::{Deserialize, Serialize};

/// Neo network type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    /// Neo `MainNet` (network magic: 860833102)
    #[default]
    MainNet,
    /// Neo `TestNet` T5 (network magic: 894710606)
    TestNet,
    /// Private/local network
    Private,
}

impl NetworkType {
    /// Get the network magic number
    #[must_use]
    pub const fn magic(&self) -> u32 {
        match self {
            Self::MainNet => 860833102,  // 0x334F454E "NEO3" LE
            Self::TestNet => 894710606,  // T5 testnet
            Self::Private => 0x01020304, // Default private
        }
    }

    /// Get the address version byte
    #[must_use]
    pub const fn address_version(&self) -> u8 {
        neo_primitives::ADDRESS_VERSION
    }
}

impl std::str::FromStr for NetworkType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" | "main" => Ok(Self::MainNet),
            "testnet" | "test" => Ok(Self::TestNet),
            "private" | "local" => Ok(Self::Private),
            other => Err(format!("unknown network '{other}'")),
        }
    }
}

impl std::fmt::Display for NetworkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MainNet => write!(f, "mainnet"),
            Self::TestNet => write!(f, "testnet"),
            Self::Private => write!(f, "private"),
        }
    }
}
