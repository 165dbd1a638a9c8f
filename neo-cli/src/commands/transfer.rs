//! Transfer command - runs the whole pipeline and prints the transaction hash

use std::sync::Arc;

use anyhow::Context;
use neo_config::TransferSettings;
use neo_rpc_client::RpcClient;
use neo_transfer::fee::{format_gas, format_units};
use neo_transfer::{parse_identity, BalanceCheck, TransferIntent, TransferOrchestrator};
use neo_vm::ContractParameter;
use neo_wallet::Account;
use num_bigint::BigInt;
use tracing::info;

use super::CommandResult;
use crate::cli::Cli;

pub async fn execute(cli: &Cli) -> CommandResult {
    let settings = load_settings(cli)?;
    let version = settings.effective_address_version();

    let account =
        Account::from_wif_with_version(&cli.wif, version).context("invalid WIF private key")?;
    let intent = build_intent(cli, &settings, &account)?;

    let url = settings.endpoint().context("invalid settings")?;
    let client = Arc::new(RpcClient::new(url).context("failed to create RPC client")?);
    info!(from = %account.address(), rpc = %settings.rpc_url, "submitting transfer");

    let orchestrator = TransferOrchestrator::new(client, settings);
    let receipt = orchestrator
        .transfer_with_receipt(&intent, &account)
        .await
        .context("transfer failed")?;

    let mut output = format!(
        "{}\n  amount: {} {}\n  network fee: {} GAS\n  system fee: {} GAS\n  valid until block: {}",
        receipt.hash,
        format_units(&intent.amount, receipt.token.decimals),
        receipt.token.symbol,
        format_gas(receipt.network_fee),
        format_gas(receipt.system_fee),
        receipt.valid_until_block,
    );
    if let BalanceCheck::Skipped { reason } = &receipt.balance_check {
        output.push_str(&format!("\n  balance check skipped: {reason}"));
    }
    Ok(output)
}

/// File settings (or defaults) with command-line overrides applied.
fn load_settings(cli: &Cli) -> anyhow::Result<TransferSettings> {
    let mut settings = match &cli.config {
        Some(path) => TransferSettings::load_from_file(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => TransferSettings::default(),
    };
    if let Some(url) = &cli.rpc_url {
        settings.rpc_url = url.clone();
    }
    if let Some(magic) = cli.network_magic {
        settings.network_magic = Some(magic);
    }
    settings.validate().context("invalid settings")?;
    Ok(settings)
}

fn build_intent(
    cli: &Cli,
    settings: &TransferSettings,
    account: &Account,
) -> anyhow::Result<TransferIntent> {
    let version = settings.effective_address_version();
    let to = parse_identity("to", &cli.to, version)?;
    let token = match &cli.token {
        Some(token) => parse_identity("token", token, version)?,
        None => settings.fee_token,
    };
    let amount: BigInt = cli
        .amount
        .trim()
        .parse()
        .with_context(|| format!("invalid amount '{}'", cli.amount))?;

    let mut intent = TransferIntent::new(
        account.script_hash(),
        to,
        token,
        amount,
        settings.effective_magic(),
    )
    .with_network_fee(cli.network_fee)
    .with_system_fee(cli.system_fee);
    if let Some(data) = &cli.data {
        intent = intent.with_data(ContractParameter::from(data.as_str()));
    }
    for contract in &cli.allow {
        intent = intent.allow_contract(parse_identity("allow", contract, version)?);
    }
    Ok(intent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use neo_config::NetworkType;
    use std::io::Write;

    const WIF: &str = "L13Wg9tckQsttrGxA8S2hMg1uqSJRWVNZh17TRTdkkNA1Libpd6o";

    fn cli(extra: &[&str]) -> Cli {
        let mut args = vec![
            "neo-transfer",
            "--wif",
            WIF,
            "--to",
            "0xef4073a0f2b305a38ec4050e4d3d28bc40ea63f5",
            "--amount",
            "150",
        ];
        args.extend_from_slice(extra);
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn flags_override_file_settings() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "rpc_url = \"http://seed1.neo.org:10332\"\nnetwork = \"mainnet\""
        )
        .unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let settings = load_settings(&cli(&[
            "--config",
            &path,
            "--rpc-url",
            "http://127.0.0.1:20332",
            "--network-magic",
            "1234",
        ]))
        .unwrap();
        assert_eq!(settings.network, NetworkType::MainNet);
        assert_eq!(settings.rpc_url, "http://127.0.0.1:20332");
        assert_eq!(settings.effective_magic(), 1234);
    }

    #[test]
    fn rejects_non_http_rpc_url() {
        assert!(load_settings(&cli(&["--rpc-url", "ftp://node"])).is_err());
    }

    #[test]
    fn intent_defaults_to_fee_token() {
        let cli = cli(&["--data", "memo", "--system-fee", "5"]);
        let settings = load_settings(&cli).unwrap();
        let account = Account::from_wif(WIF).unwrap();
        let intent = build_intent(&cli, &settings, &account).unwrap();

        assert_eq!(intent.token, settings.fee_token);
        assert_eq!(intent.from, account.script_hash());
        assert_eq!(intent.amount, BigInt::from(150));
        assert_eq!(intent.system_fee_override, 5);
        assert_eq!(intent.data, Some(ContractParameter::from("memo")));
        assert_eq!(intent.network_magic, settings.effective_magic());
    }

    #[test]
    fn malformed_amount_is_reported() {
        let cli = cli(&[]);
        let mut bad = cli;
        bad.amount = "1.5".to_string();
        let settings = TransferSettings::default();
        let account = Account::from_wif(WIF).unwrap();
        let err = build_intent(&bad, &settings, &account).unwrap_err();
        assert!(err.to_string().contains("invalid amount"));
    }
}
