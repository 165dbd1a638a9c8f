//! Single-signature accounts for signing Neo N3 transactions.

mod account;
mod error;

pub use account::Account;
pub use error::{WalletError, WalletResult};
