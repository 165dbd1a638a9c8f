//! # Neo Transfer
//!
//! Builds, prices, checks and submits a single NEP-17 transfer.
//!
//! The stages run strictly in order and the first failure ends the transfer:
//!
//! 1. [`TransactionBuilder`] encodes `transfer(from, to, amount, data)` and sets
//!    the validity window from the current height
//! 2. [`TokenResolver`] confirms the token answers `symbol`
//! 3. [`FeeEstimator`] prices the network fee, then dry-runs for the system fee
//! 4. [`BalanceValidator`] checks the sender can pay amount and fees
//! 5. [`TransferOrchestrator`] signs and broadcasts
//!
//! The node is reached only through [`NodeRpc`], implemented for
//! [`neo_rpc_client::RpcClient`].

pub mod balance;
pub mod builder;
pub mod error;
pub mod estimator;
pub mod fee;
pub mod fee_policy;
pub mod intent;
pub mod node;
pub mod orchestrator;
pub mod signer;
pub mod token;
pub mod transaction;

pub use balance::{check_balances, BalanceCheck, BalanceValidator};
pub use builder::TransactionBuilder;
pub use error::{BuildError, TransferError, TransferResult};
pub use estimator::FeeEstimator;
pub use fee::{FeeKind, FeeQuote};
pub use fee_policy::FeePolicyOracle;
pub use intent::{parse_identity, TransferIntent};
pub use node::NodeRpc;
pub use orchestrator::{TransferOrchestrator, TransferReceipt};
pub use signer::TransactionSigner;
pub use token::{TokenInfo, TokenResolver};
pub use transaction::{PricedTransaction, UnsignedTransaction};
