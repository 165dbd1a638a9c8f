//! Transactions and their parts.

pub mod signer;
pub mod transaction;
pub mod witness;

pub use signer::{Signer, MAX_ALLOWED_CONTRACTS};
pub use transaction::Transaction;
pub use witness::Witness;
