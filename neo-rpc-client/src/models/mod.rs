//! Request, response and result payloads.

mod rpc_invoke_result;
mod rpc_nep17_balances;
mod rpc_request;

pub use rpc_invoke_result::{RpcInvokeResult, RpcStack, VmState};
pub use rpc_nep17_balances::{RpcNep17Balance, RpcNep17Balances};
pub use rpc_request::{RpcRequest, RpcResponse, RpcResponseError};
