//! # Neo Primitives
//!
//! Fundamental types shared by every crate in the transfer workspace:
//! - `UInt160`: script hashes of accounts and contracts
//! - `UInt256`: transaction hashes
//! - `WitnessScope`: signer authorization scopes
//!
//! ## Example
//!
//! ```rust
//! use neo_primitives::UInt160;
//!
//! let gas = UInt160::parse("0xd2a4cff31913016155e38e474a2c06d08be276cf").unwrap();
//! assert_eq!(gas.to_string(), "0xd2a4cff31913016155e38e474a2c06d08be276cf");
//! ```

pub mod constants;
pub mod error;
pub mod uint160;
pub mod uint256;
pub mod witness_scope;

pub use constants::*;
pub use error::{PrimitiveError, PrimitiveResult};
pub use uint160::{UInt160, UINT160_SIZE};
pub use uint256::{UInt256, UINT256_SIZE};
pub use witness_scope::WitnessScope;
