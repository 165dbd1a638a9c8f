//! # Neo Core
//!
//! The transaction model used by the transfer pipeline:
//!
//! - [`io::BinaryWriter`] and the [`io::BinEncoder`] trait for the N3 wire format
//! - [`tx::Transaction`], [`tx::Signer`] and [`tx::Witness`]
//! - [`NativeContract`] identities (NEO, GAS, Policy)
//! - [`contract`] helpers for single-signature verification scripts

pub mod contract;
pub mod error;
pub mod io;
pub mod native_contract;
pub mod tx;

pub use error::{CoreError, CoreResult};
pub use native_contract::NativeContract;
pub use tx::{Signer, Transaction, Witness};
