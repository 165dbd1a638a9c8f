//! Neo RPC Client Library
//!
//! A JSON-RPC client for the node methods a token transfer needs:
//! `getblockcount`, `invokefunction`, `invokescript`, `getnep17balances` and
//! `sendrawtransaction`.

mod error;
pub mod models;
mod rpc_client;

pub use error::{ClientRpcError, INTERNAL_ERROR, PARSE_ERROR};
pub use rpc_client::{RpcClient, RpcClientBuilder, DEFAULT_HTTP_TIMEOUT};

pub use models::{
    RpcInvokeResult, RpcNep17Balance, RpcNep17Balances, RpcRequest, RpcResponse,
    RpcResponseError, RpcStack, VmState,
};
