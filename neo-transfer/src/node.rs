use std::sync::Arc;

use async_trait::async_trait;
use neo_core::Signer;
use neo_primitives::{UInt160, UInt256};
use neo_rpc_client::{ClientRpcError, RpcClient, RpcInvokeResult, RpcNep17Balances};
use neo_vm::ContractParameter;

/// The node calls the pipeline depends on.
#[async_trait]
pub trait NodeRpc: Send + Sync {
    async fn get_block_count(&self) -> Result<u32, ClientRpcError>;

    async fn invoke_function(
        &self,
        contract: &UInt160,
        method: &str,
        args: &[ContractParameter],
    ) -> Result<RpcInvokeResult, ClientRpcError>;

    async fn invoke_script(
        &self,
        script: &[u8],
        signers: &[Signer],
    ) -> Result<RpcInvokeResult, ClientRpcError>;

    async fn get_nep17_balances(&self, address: &str) -> Result<RpcNep17Balances, ClientRpcError>;

    async fn send_raw_transaction(&self, tx: &[u8]) -> Result<UInt256, ClientRpcError>;
}

#[async_trait]
impl NodeRpc for RpcClient {
    async fn get_block_count(&self) -> Result<u32, ClientRpcError> {
        RpcClient::get_block_count(self).await
    }

    async fn invoke_function(
        &self,
        contract: &UInt160,
        method: &str,
        args: &[ContractParameter],
    ) -> Result<RpcInvokeResult, ClientRpcError> {
        RpcClient::invoke_function(self, contract, method, args).await
    }

    async fn invoke_script(
        &self,
        script: &[u8],
        signers: &[Signer],
    ) -> Result<RpcInvokeResult, ClientRpcError> {
        RpcClient::invoke_script(self, script, signers).await
    }

    async fn get_nep17_balances(&self, address: &str) -> Result<RpcNep17Balances, ClientRpcError> {
        RpcClient::get_nep17_balances(self, address).await
    }

    async fn send_raw_transaction(&self, tx: &[u8]) -> Result<UInt256, ClientRpcError> {
        RpcClient::send_raw_transaction(self, tx).await
    }
}

#[async_trait]
impl<T: NodeRpc + ?Sized> NodeRpc for Arc<T> {
    async fn get_block_count(&self) -> Result<u32, ClientRpcError> {
        (**self).get_block_count().await
    }

    async fn invoke_function(
        &self,
        contract: &UInt160,
        method: &str,
        args: &[ContractParameter],
    ) -> Result<RpcInvokeResult, ClientRpcError> {
        (**self).invoke_function(contract, method, args).await
    }

    async fn invoke_script(
        &self,
        script: &[u8],
        signers: &[Signer],
    ) -> Result<RpcInvokeResult, ClientRpcError> {
        (**self).invoke_script(script, signers).await
    }

    async fn get_nep17_balances(&self, address: &str) -> Result<RpcNep17Balances, ClientRpcError> {
        (**self).get_nep17_balances(address).await
    }

    async fn send_raw_transaction(&self, tx: &[u8]) -> Result<UInt256, ClientRpcError> {
        (**self).send_raw_transaction(tx).await
    }
}
