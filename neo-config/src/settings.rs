//! Transfer settings loaded from TOML.

use std::path::Path;

use neo_primitives::UInt160;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::error::{ConfigError, ConfigResult};
use crate::network::NetworkType;

/// GAS token script hash, the fee currency.
pub const GAS_TOKEN: &str = "0xd2a4cff31913016155e38e474a2c06d08be276cf";

/// Settings shared by every transfer submitted through one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferSettings {
    /// JSON-RPC endpoint of the node
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,

    /// Network type
    #[serde(default)]
    pub network: NetworkType,

    /// Custom network magic (overrides `network` if set)
    #[serde(default)]
    pub network_magic: Option<u32>,

    /// Custom address version (overrides `network` if set)
    #[serde(default)]
    pub address_version: Option<u8>,

    /// Blocks added to the current height to form `validUntilBlock`
    #[serde(default = "default_valid_until_block_increment")]
    pub valid_until_block_increment: u32,

    /// Bytes a single-signature witness adds to the serialized transaction
    #[serde(default = "default_witness_overhead")]
    pub witness_overhead: i64,

    /// Flat verification cost of a single-signature witness, in datoshi
    #[serde(default = "default_witness_verification_fee")]
    pub witness_verification_fee: i64,

    /// Token both fees are paid in
    #[serde(default = "default_fee_token")]
    pub fee_token: UInt160,
}

fn default_rpc_url() -> String {
    "http://localhost:10332".to_string()
}

const fn default_valid_until_block_increment() -> u32 {
    1000
}

const fn default_witness_overhead() -> i64 {
    109
}

const fn default_witness_verification_fee() -> i64 {
    1_000_390
}

const fn default_fee_token() -> UInt160 {
    UInt160::from_array([
        0xcf, 0x76, 0xe2, 0x8b, 0xd0, 0x06, 0x2c, 0x4a, 0x47, 0x8e, 0xe3, 0x55, 0x61, 0x01, 0x13,
        0x19, 0xf3, 0xcf, 0xa4, 0xd2,
    ])
}

impl Default for TransferSettings {
    fn default() -> Self {
        Self {
            rpc_url: default_rpc_url(),
            network: NetworkType::default(),
            network_magic: None,
            address_version: None,
            valid_until_block_increment: default_valid_until_block_increment(),
            witness_overhead: default_witness_overhead(),
            witness_verification_fee: default_witness_verification_fee(),
            fee_token: default_fee_token(),
        }
    }
}

impl TransferSettings {
    /// Load settings from a TOML file and validate them
    pub fn load_from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), network = %settings.network, "loaded transfer settings");
        Ok(settings)
    }

    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let settings: Self = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Get the effective network magic
    #[must_use]
    pub fn effective_magic(&self) -> u32 {
        self.network_magic.unwrap_or_else(|| self.network.magic())
    }

    /// Get the effective address version
    #[must_use]
    pub fn effective_address_version(&self) -> u8 {
        self.address_version
            .unwrap_or_else(|| self.network.address_version())
    }

    /// The parsed node endpoint. Only `http` and `https` are accepted.
    pub fn endpoint(&self) -> ConfigResult<Url> {
        let url = Url::parse(&self.rpc_url).map_err(|err| ConfigError::InvalidValue {
            field: "rpc_url",
            reason: format!("'{}': {err}", self.rpc_url),
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ConfigError::InvalidValue {
                field: "rpc_url",
                reason: format!("unsupported scheme '{other}' in '{}'", self.rpc_url),
            }),
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        self.endpoint()?;
        if self.valid_until_block_increment == 0 {
            return Err(ConfigError::InvalidValue {
                field: "valid_until_block_increment",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.witness_overhead < 0 {
            return Err(ConfigError::InvalidValue {
                field: "witness_overhead",
                reason: "must not be negative".to_string(),
            });
        }
        if self.witness_verification_fee < 0 {
            return Err(ConfigError::InvalidValue {
                field: "witness_verification_fee",
                reason: "must not be negative".to_string(),
            });
        }
        Ok(())
    }
}
