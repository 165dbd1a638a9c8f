use std::time::{Duration, Instant};

use base64::{engine::general_purpose, Engine as _};
use neo_core::Signer;
use neo_primitives::{UInt160, UInt256};
use neo_vm::ContractParameter;
use reqwest::{Client, Url};
use serde_json::{json, Value};
use tracing::{debug, trace};

use super::builder::RpcClientBuilder;
use super::helpers::{token_as_object, token_as_u32};
use super::RpcClient;
use crate::error::{ClientRpcError, INTERNAL_ERROR, PARSE_ERROR};
use crate::models::{RpcInvokeResult, RpcNep17Balances, RpcRequest, RpcResponse};

impl RpcClient {
    /// Creates a configurable builder for the RPC client.
    #[must_use]
    pub fn builder(url: Url) -> RpcClientBuilder {
        RpcClientBuilder::new(url)
    }

    /// Creates a client with default settings.
    pub fn new(url: Url) -> Result<Self, ClientRpcError> {
        RpcClientBuilder::new(url).build()
    }

    /// Creates a client over an existing HTTP client.
    #[must_use]
    pub fn with_client(client: Client, url: Url, timeout: Duration) -> Self {
        Self {
            base_address: url,
            http_client: client,
            request_timeout: timeout,
        }
    }

    pub fn url(&self) -> &Url {
        &self.base_address
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    fn as_rpc_request(method: &str, params: Vec<Value>) -> RpcRequest {
        RpcRequest {
            id: json!(1),
            json_rpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        }
    }

    fn as_rpc_response(content: &str, throw_on_error: bool) -> Result<RpcResponse, ClientRpcError> {
        let response: RpcResponse = serde_json::from_str(content)
            .map_err(|e| ClientRpcError::new(PARSE_ERROR, format!("Parse error: {e}")))?;

        if let Some(ref error) = response.error {
            if throw_on_error {
                return Err(ClientRpcError::new(error.code, error.message.clone()));
            }
        }

        Ok(response)
    }

    /// Sends an RPC request and returns the whole response.
    pub async fn send_async(
        &self,
        request: RpcRequest,
        throw_on_error: bool,
    ) -> Result<RpcResponse, ClientRpcError> {
        let method = request.method.clone();
        let start = Instant::now();

        let result: Result<RpcResponse, ClientRpcError> = async {
            let response = self
                .http_client
                .post(self.base_address.clone())
                .json(&request)
                .send()
                .await
                .map_err(|e| ClientRpcError::new(INTERNAL_ERROR, format!("HTTP error: {e}")))?;

            let content = response.text().await.map_err(|e| {
                ClientRpcError::new(INTERNAL_ERROR, format!("Failed to read response: {e}"))
            })?;
            trace!(target: "neo::rpc", %method, body = %content, "rpc response");

            Self::as_rpc_response(&content, throw_on_error)
        }
        .await;

        let elapsed_ms = start.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => debug!(target: "neo::rpc", %method, elapsed_ms, "rpc call succeeded"),
            Err(err) => debug!(
                target: "neo::rpc",
                %method,
                elapsed_ms,
                code = err.code(),
                error = %err.message(),
                "rpc call failed"
            ),
        }

        result
    }

    /// Sends an RPC request and returns its `result` member.
    pub async fn rpc_send_async(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> Result<Value, ClientRpcError> {
        let request = Self::as_rpc_request(method, params);
        let response = self.send_async(request, true).await?;
        response
            .result
            .ok_or_else(|| ClientRpcError::internal("No result returned"))
    }

    /// Number of blocks in the main chain (`getblockcount`).
    pub async fn get_block_count(&self) -> Result<u32, ClientRpcError> {
        let result = self.rpc_send_async("getblockcount", vec![]).await?;
        token_as_u32(result, "getblockcount")
    }

    /// Test-invokes a contract method without signers.
    pub async fn invoke_function(
        &self,
        contract_hash: &UInt160,
        operation: &str,
        params: &[ContractParameter],
    ) -> Result<RpcInvokeResult, ClientRpcError> {
        let args: Vec<Value> = params.iter().map(ContractParameter::to_json).collect();
        let result = self
            .rpc_send_async(
                "invokefunction",
                vec![
                    Value::String(contract_hash.to_string()),
                    Value::String(operation.to_string()),
                    Value::Array(args),
                ],
            )
            .await?;
        let obj = token_as_object(result, "invokefunction")?;
        RpcInvokeResult::from_json(&obj).map_err(ClientRpcError::internal)
    }

    /// Dry-runs a script in the context of `signers`.
    pub async fn invoke_script(
        &self,
        script: &[u8],
        signers: &[Signer],
    ) -> Result<RpcInvokeResult, ClientRpcError> {
        let mut parameters = Vec::with_capacity(2);
        parameters.push(Value::String(general_purpose::STANDARD.encode(script)));
        if !signers.is_empty() {
            parameters.push(Value::Array(signers.iter().map(Signer::to_json).collect()));
        }

        let result = self.rpc_send_async("invokescript", parameters).await?;
        let obj = token_as_object(result, "invokescript")?;
        RpcInvokeResult::from_json(&obj).map_err(ClientRpcError::internal)
    }

    /// NEP-17 balances of an address (requires the node's token tracker plugin).
    pub async fn get_nep17_balances(
        &self,
        address: &str,
    ) -> Result<RpcNep17Balances, ClientRpcError> {
        let result = self
            .rpc_send_async("getnep17balances", vec![Value::String(address.to_string())])
            .await?;
        let obj = token_as_object(result, "getnep17balances")?;
        RpcNep17Balances::from_json(&obj).map_err(ClientRpcError::internal)
    }

    /// Broadcasts a serialized, signed transaction.
    pub async fn send_raw_transaction(&self, bytes: &[u8]) -> Result<UInt256, ClientRpcError> {
        let encoded = general_purpose::STANDARD.encode(bytes);
        let result = self
            .rpc_send_async("sendrawtransaction", vec![Value::String(encoded)])
            .await?;
        let obj = token_as_object(result, "sendrawtransaction")?;
        let hash = obj
            .get("hash")
            .and_then(Value::as_str)
            .ok_or_else(|| ClientRpcError::internal("Missing hash in sendrawtransaction"))?;
        UInt256::parse(hash)
            .map_err(|err| ClientRpcError::internal(format!("Invalid tx hash: {err}")))
    }
}
