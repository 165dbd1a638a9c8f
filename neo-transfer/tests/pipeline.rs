use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use neo_config::TransferSettings;
use neo_core::{NativeContract, Signer, Transaction};
use neo_primitives::{UInt160, UInt256, WitnessScope};
use neo_rpc_client::{
    ClientRpcError, RpcInvokeResult, RpcNep17Balance, RpcNep17Balances, RpcStack, VmState,
};
use neo_transfer::builder::{transfer_script, transfer_signer};
use neo_transfer::{
    BalanceCheck, BuildError, FeeKind, NodeRpc, TransactionBuilder, TransferError,
    TransferIntent, TransferOrchestrator,
};
use neo_vm::ContractParameter;
use neo_wallet::Account;
use num_bigint::BigInt;
use serde_json::json;

const WIF: &str = "L13Wg9tckQsttrGxA8S2hMg1uqSJRWVNZh17TRTdkkNA1Libpd6o";
const MAGIC: u32 = 894_710_606;
const HEIGHT: u32 = 5_000;
const GAS_CONSUMED: i64 = 997_775;

fn halt(stack: Vec<RpcStack>, gas_consumed: i64) -> RpcInvokeResult {
    RpcInvokeResult {
        script: String::new(),
        state: VmState::Halt,
        gas_consumed,
        stack,
        exception: None,
    }
}

fn fault(exception: &str) -> RpcInvokeResult {
    RpcInvokeResult {
        script: String::new(),
        state: VmState::Fault,
        gas_consumed: 2_000_000,
        stack: Vec::new(),
        exception: Some(exception.to_string()),
    }
}

fn integer(value: i64) -> RpcStack {
    RpcStack {
        item_type: "Integer".to_string(),
        value: json!(value.to_string()),
    }
}

fn byte_string(base64: &str) -> RpcStack {
    RpcStack {
        item_type: "ByteString".to_string(),
        value: json!(base64),
    }
}

fn transport_error() -> ClientRpcError {
    ClientRpcError::internal("HTTP error: connection refused")
}

/// A node with scripted answers that records every call it receives.
struct MockNode {
    block_count: Result<u32, ClientRpcError>,
    fee_per_byte: Result<RpcInvokeResult, ClientRpcError>,
    symbol: Result<RpcInvokeResult, ClientRpcError>,
    decimals: Result<RpcInvokeResult, ClientRpcError>,
    dry_run: Result<RpcInvokeResult, ClientRpcError>,
    balances: Result<RpcNep17Balances, ClientRpcError>,
    broadcast: Result<UInt256, ClientRpcError>,
    calls: Mutex<Vec<String>>,
    dry_run_signers: Mutex<Vec<Signer>>,
    broadcast_raw: Mutex<Option<Vec<u8>>>,
}

impl MockNode {
    fn healthy(holder: &str, gas_balance: i64) -> Self {
        Self {
            block_count: Ok(HEIGHT),
            fee_per_byte: Ok(halt(vec![integer(1000)], 0)),
            symbol: Ok(halt(vec![byte_string("R0FT")], 0)),
            decimals: Ok(halt(vec![integer(8)], 0)),
            dry_run: Ok(halt(Vec::new(), GAS_CONSUMED)),
            balances: Ok(RpcNep17Balances {
                user_script_hash: holder.to_string(),
                balances: vec![RpcNep17Balance {
                    asset_hash: NativeContract::Gas.hash(),
                    amount: BigInt::from(gas_balance),
                    last_updated_block: 10,
                }],
            }),
            broadcast: Ok(UInt256::from([7u8; 32])),
            calls: Mutex::new(Vec::new()),
            dry_run_signers: Mutex::new(Vec::new()),
            broadcast_raw: Mutex::new(None),
        }
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn broadcast_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| *call == "sendrawtransaction")
            .count()
    }
}

#[async_trait]
impl NodeRpc for MockNode {
    async fn get_block_count(&self) -> Result<u32, ClientRpcError> {
        self.record("getblockcount");
        self.block_count.clone()
    }

    async fn invoke_function(
        &self,
        _contract: &UInt160,
        method: &str,
        _args: &[ContractParameter],
    ) -> Result<RpcInvokeResult, ClientRpcError> {
        self.record(format!("invokefunction:{method}"));
        match method {
            "getFeePerByte" => self.fee_per_byte.clone(),
            "symbol" => self.symbol.clone(),
            "decimals" => self.decimals.clone(),
            other => Err(ClientRpcError::internal(format!("unexpected method {other}"))),
        }
    }

    async fn invoke_script(
        &self,
        _script: &[u8],
        signers: &[Signer],
    ) -> Result<RpcInvokeResult, ClientRpcError> {
        self.record("invokescript");
        *self.dry_run_signers.lock().unwrap() = signers.to_vec();
        self.dry_run.clone()
    }

    async fn get_nep17_balances(&self, _address: &str) -> Result<RpcNep17Balances, ClientRpcError> {
        self.record("getnep17balances");
        self.balances.clone()
    }

    async fn send_raw_transaction(&self, tx: &[u8]) -> Result<UInt256, ClientRpcError> {
        self.record("sendrawtransaction");
        *self.broadcast_raw.lock().unwrap() = Some(tx.to_vec());
        self.broadcast.clone()
    }
}

struct Fixture {
    account: Account,
    intent: TransferIntent,
}

fn fixture(amount: i64) -> Fixture {
    let account = Account::from_wif(WIF).unwrap();
    let intent = TransferIntent::new(
        account.script_hash(),
        UInt160::parse("0xef4073a0f2b305a38ec4050e4d3d28bc40ea63f5").unwrap(),
        NativeContract::Gas.hash(),
        amount,
        MAGIC,
    );
    Fixture { account, intent }
}

fn orchestrator(node: &Arc<MockNode>) -> TransferOrchestrator<MockNode> {
    TransferOrchestrator::new(Arc::clone(node), TransferSettings::default())
}

fn expected_network_fee(intent: &TransferIntent) -> i64 {
    let tx = Transaction::new(
        0,
        HEIGHT + 1000,
        vec![transfer_signer(intent).unwrap()],
        transfer_script(intent).unwrap(),
    )
    .unwrap();
    1000 * (tx.unsigned_size() as i64 + 109) + 1_000_390
}

const FULL_RUN: [&str; 7] = [
    "getblockcount",
    "invokefunction:symbol",
    "invokefunction:decimals",
    "invokefunction:getFeePerByte",
    "invokescript",
    "getnep17balances",
    "sendrawtransaction",
];

#[tokio::test]
async fn happy_path_runs_every_stage_in_order() {
    let f = fixture(100_000_000);
    let node = Arc::new(MockNode::healthy(&f.account.address(), 10_000_000_000));

    let receipt = orchestrator(&node)
        .transfer_with_receipt(&f.intent, &f.account)
        .await
        .unwrap();

    assert_eq!(node.calls(), FULL_RUN);
    assert_eq!(receipt.hash, UInt256::from([7u8; 32]));
    assert_eq!(receipt.network_fee, expected_network_fee(&f.intent));
    assert_eq!(receipt.system_fee, GAS_CONSUMED);
    assert_eq!(receipt.valid_until_block, HEIGHT + 1000);
    assert_eq!(receipt.token.symbol, "GAS");
    assert_eq!(receipt.token.decimals, 8);
    assert_eq!(receipt.balance_check, BalanceCheck::Sufficient);
}

#[tokio::test]
async fn broadcast_bytes_carry_fees_and_one_witness() {
    let f = fixture(1);
    let node = Arc::new(MockNode::healthy(&f.account.address(), 10_000_000_000));
    orchestrator(&node)
        .transfer(&f.intent, &f.account)
        .await
        .unwrap();

    let raw = node.broadcast_raw.lock().unwrap().clone().unwrap();
    assert_eq!(raw[0], 0);
    let system_fee = i64::from_le_bytes(raw[5..13].try_into().unwrap());
    let network_fee = i64::from_le_bytes(raw[13..21].try_into().unwrap());
    let valid_until = u32::from_le_bytes(raw[21..25].try_into().unwrap());
    assert_eq!(system_fee, GAS_CONSUMED);
    assert_eq!(network_fee, expected_network_fee(&f.intent));
    assert_eq!(valid_until, HEIGHT + 1000);

    // witness count, then PUSHDATA1 64 <sig>, then the verification script
    let witnesses = &raw[raw.len() - 109..];
    assert_eq!(witnesses[0], 1);
    assert_eq!(&witnesses[1..4], &[0x42, 0x0C, 0x40]);
    assert_eq!(&witnesses[68..], {
        let mut tail = vec![0x28];
        tail.extend_from_slice(f.account.verification_script());
        tail
    });
}

#[tokio::test]
async fn dry_run_signs_as_called_by_entry() {
    let f = fixture(1);
    let node = Arc::new(MockNode::healthy(&f.account.address(), 10_000_000_000));
    orchestrator(&node)
        .transfer(&f.intent, &f.account)
        .await
        .unwrap();

    let signers = node.dry_run_signers.lock().unwrap().clone();
    assert_eq!(signers, vec![Signer::called_by_entry(f.account.script_hash())]);
}

#[tokio::test]
async fn overrides_apply_only_above_the_minimum() {
    let f = fixture(1);
    let minimum = expected_network_fee(&f.intent);

    let node = Arc::new(MockNode::healthy(&f.account.address(), 10_000_000_000));
    let generous = f
        .intent
        .clone()
        .with_network_fee(minimum + 1)
        .with_system_fee(GAS_CONSUMED * 2);
    let receipt = orchestrator(&node)
        .transfer_with_receipt(&generous, &f.account)
        .await
        .unwrap();
    assert_eq!(receipt.network_fee, minimum + 1);
    assert_eq!(receipt.system_fee, GAS_CONSUMED * 2);

    let node = Arc::new(MockNode::healthy(&f.account.address(), 10_000_000_000));
    let stingy = f.intent.clone().with_network_fee(1).with_system_fee(1);
    let receipt = orchestrator(&node)
        .transfer_with_receipt(&stingy, &f.account)
        .await
        .unwrap();
    assert_eq!(receipt.network_fee, minimum);
    assert_eq!(receipt.system_fee, GAS_CONSUMED);
}

#[tokio::test]
async fn faulting_dry_run_never_broadcasts() {
    let f = fixture(1);
    let mut node = MockNode::healthy(&f.account.address(), 10_000_000_000);
    node.dry_run = Ok(fault("out of gas"));
    let node = Arc::new(node);

    let err = orchestrator(&node)
        .transfer(&f.intent.clone().with_system_fee(50_000_000), &f.account)
        .await
        .unwrap_err();

    assert_eq!(
        err,
        TransferError::ScriptExecution {
            state: VmState::Fault,
            exception: Some("out of gas".to_string()),
            gas_consumed: 2_000_000,
        }
    );
    assert_eq!(node.calls(), FULL_RUN[..5]);
    assert_eq!(node.broadcast_count(), 0);
}

#[tokio::test]
async fn missing_balance_index_still_broadcasts() {
    let f = fixture(1);
    let mut node = MockNode::healthy(&f.account.address(), 0);
    node.balances = Err(ClientRpcError::new(-32601, "Method not found"));
    let node = Arc::new(node);

    let receipt = orchestrator(&node)
        .transfer_with_receipt(&f.intent, &f.account)
        .await
        .unwrap();

    assert!(matches!(receipt.balance_check, BalanceCheck::Skipped { .. }));
    assert_eq!(node.broadcast_count(), 1);
}

#[tokio::test]
async fn insufficient_gas_stops_before_signing() {
    let f = fixture(100);
    let node = Arc::new(MockNode::healthy(&f.account.address(), 150));

    let err = orchestrator(&node)
        .transfer(&f.intent, &f.account)
        .await
        .unwrap_err();

    match err {
        TransferError::InsufficientGas {
            required,
            available,
        } => {
            assert_eq!(available, BigInt::from(150));
            assert_eq!(
                required,
                BigInt::from(100 + GAS_CONSUMED + expected_network_fee(&f.intent))
            );
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(node.broadcast_count(), 0);
}

#[tokio::test]
async fn fee_policy_failure_needs_an_override() {
    let f = fixture(1);
    let mut node = MockNode::healthy(&f.account.address(), 10_000_000_000);
    node.fee_per_byte = Err(transport_error());
    let node = Arc::new(node);

    let err = orchestrator(&node)
        .transfer(&f.intent, &f.account)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        TransferError::FeeUnavailable {
            kind: FeeKind::Network,
            ..
        }
    ));
    assert_eq!(node.calls(), FULL_RUN[..4]);

    let mut node = MockNode::healthy(&f.account.address(), 10_000_000_000);
    node.fee_per_byte = Ok(fault("policy unavailable"));
    let node = Arc::new(node);
    let err = orchestrator(&node)
        .transfer(&f.intent, &f.account)
        .await
        .unwrap_err();
    match err {
        TransferError::FeeUnavailable {
            kind: FeeKind::Network,
            reason,
        } => assert!(reason.contains("policy unavailable"), "{reason}"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(node.calls(), FULL_RUN[..4]);
    assert_eq!(node.broadcast_count(), 0);

    let mut node = MockNode::healthy(&f.account.address(), 10_000_000_000);
    node.fee_per_byte = Ok(fault("policy unavailable"));
    let node = Arc::new(node);
    let receipt = orchestrator(&node)
        .transfer_with_receipt(&f.intent.clone().with_network_fee(2_000_000), &f.account)
        .await
        .unwrap();
    assert_eq!(receipt.network_fee, 2_000_000);
    assert_eq!(node.broadcast_count(), 1);
}

#[tokio::test]
async fn dry_run_transport_failure_needs_an_override() {
    let f = fixture(1);
    let mut node = MockNode::healthy(&f.account.address(), 10_000_000_000);
    node.dry_run = Err(transport_error());
    let node = Arc::new(node);

    let err = orchestrator(&node)
        .transfer(&f.intent, &f.account)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        TransferError::FeeUnavailable {
            kind: FeeKind::System,
            ..
        }
    ));
    assert_eq!(node.calls(), FULL_RUN[..5]);
}

#[tokio::test]
async fn unknown_token_stops_before_fees() {
    let f = fixture(1);
    let mut node = MockNode::healthy(&f.account.address(), 10_000_000_000);
    node.symbol = Ok(fault("called contract does not exist"));
    let node = Arc::new(node);

    let err = orchestrator(&node)
        .transfer(&f.intent, &f.account)
        .await
        .unwrap_err();
    assert!(matches!(err, TransferError::TokenNotFound { token, .. } if token == NativeContract::Gas.hash()));
    assert_eq!(node.calls(), FULL_RUN[..2]);
}

#[tokio::test]
async fn failing_decimals_falls_back_to_zero() {
    let f = fixture(1);
    let mut node = MockNode::healthy(&f.account.address(), 10_000_000_000);
    node.decimals = Err(transport_error());
    let node = Arc::new(node);

    let receipt = orchestrator(&node)
        .transfer_with_receipt(&f.intent, &f.account)
        .await
        .unwrap();
    assert_eq!(receipt.token.decimals, 0);
}

#[tokio::test]
async fn height_failure_is_a_build_error() {
    let f = fixture(1);
    let mut node = MockNode::healthy(&f.account.address(), 10_000_000_000);
    node.block_count = Err(transport_error());
    let node = Arc::new(node);

    let err = orchestrator(&node)
        .transfer(&f.intent, &f.account)
        .await
        .unwrap_err();
    assert!(matches!(err, TransferError::Build(BuildError::BlockCount(_))));
    assert_eq!(node.calls(), FULL_RUN[..1]);
}

#[tokio::test]
async fn invalid_intent_makes_no_calls() {
    let f = fixture(0);
    let node = Arc::new(MockNode::healthy(&f.account.address(), 10_000_000_000));

    let err = orchestrator(&node)
        .transfer(&f.intent, &f.account)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        TransferError::Build(BuildError::NonPositiveAmount(_))
    ));
    assert!(node.calls().is_empty());
}

#[tokio::test]
async fn foreign_signer_makes_no_calls() {
    let f = fixture(1);
    let node = Arc::new(MockNode::healthy(&f.account.address(), 10_000_000_000));
    let mut intent = f.intent.clone();
    intent.from = UInt160::from([5u8; 20]);

    let err = orchestrator(&node)
        .transfer(&intent, &f.account)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        TransferError::Build(BuildError::SignerMismatch { .. })
    ));
    assert!(node.calls().is_empty());
}

#[tokio::test]
async fn rejected_broadcast_keeps_node_reason() {
    let f = fixture(1);
    let mut node = MockNode::healthy(&f.account.address(), 10_000_000_000);
    node.broadcast = Err(ClientRpcError::new(-511, "Insufficient funds"));
    let node = Arc::new(node);

    let err = orchestrator(&node)
        .transfer(&f.intent, &f.account)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        TransferError::Broadcast {
            code: -511,
            reason: "Insufficient funds".to_string(),
        }
    );
}

#[tokio::test]
async fn identical_intent_and_height_build_identical_scripts() {
    let f = fixture(42);
    let intent = f
        .intent
        .with_data(ContractParameter::from("invoice-7"))
        .allow_contract(UInt160::from([9u8; 20]));
    let node = Arc::new(MockNode::healthy(&f.account.address(), 0));
    let builder = TransactionBuilder::new(Arc::clone(&node), 1000);

    let first = builder.build(&intent).await.unwrap();
    let second = builder.build(&intent).await.unwrap();
    assert_eq!(first.script(), second.script());
    assert_eq!(first.valid_until_block(), second.valid_until_block());

    let signer = &first.transaction().signers()[0];
    assert_eq!(signer.scopes, WitnessScope::CUSTOM_CONTRACTS);
    assert_eq!(
        signer.allowed_contracts,
        vec![intent.token, intent.to, UInt160::from([9u8; 20])]
    );
}
