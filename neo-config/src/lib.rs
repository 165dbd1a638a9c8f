//! # Neo Config
//!
//! Settings for the transfer pipeline: which node to talk to, which network
//! magic to sign under, and the fee constants of a single-signature witness.

pub mod error;
pub mod network;
pub mod settings;

pub use error::{ConfigError, ConfigResult};
pub use network::NetworkType;
pub use settings::{TransferSettings, GAS_TOKEN};
