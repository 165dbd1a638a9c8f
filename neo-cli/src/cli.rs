use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "neo-transfer",
    version,
    about = "Build, price, check and broadcast a NEP-17 transfer"
)]
pub struct Cli {
    /// TOML settings file
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Node JSON-RPC endpoint (overrides the settings file)
    #[arg(long)]
    pub rpc_url: Option<String>,

    /// Network magic to sign under (overrides the settings file)
    #[arg(long)]
    pub network_magic: Option<u32>,

    /// WIF private key of the source account
    #[arg(long, env = "NEO_TRANSFER_WIF", hide_env_values = true)]
    pub wif: String,

    /// Destination address or 0x-prefixed script hash
    #[arg(long)]
    pub to: String,

    /// Token contract hash; defaults to the fee token (GAS)
    #[arg(long)]
    pub token: Option<String>,

    /// Amount in the token's smallest unit
    #[arg(long)]
    pub amount: String,

    /// Network fee in datoshi, used when not below the computed minimum
    #[arg(long, default_value_t = 0)]
    pub network_fee: i64,

    /// System fee in datoshi, used when not below the computed minimum
    #[arg(long, default_value_t = 0)]
    pub system_fee: i64,

    /// String passed as the `data` argument of `transfer`
    #[arg(long)]
    pub data: Option<String>,

    /// Additional contract the signature may be used by (repeatable)
    #[arg(long = "allow", value_name = "CONTRACT")]
    pub allow: Vec<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_repeated_allow_and_fees() {
        let cli = Cli::try_parse_from([
            "neo-transfer",
            "--wif",
            "L13Wg9tckQsttrGxA8S2hMg1uqSJRWVNZh17TRTdkkNA1Libpd6o",
            "--to",
            "NigoG6c4gTJcUVZtpY7fZPcCZaA2WiE12m",
            "--amount",
            "100000000",
            "--network-fee",
            "2000000",
            "--allow",
            "0xef4073a0f2b305a38ec4050e4d3d28bc40ea63f5",
            "--allow",
            "0xcc5e4edd9f5f8dba8bb65734541df7a1c081c67b",
        ])
        .unwrap();
        assert_eq!(cli.network_fee, 2_000_000);
        assert_eq!(cli.system_fee, 0);
        assert_eq!(cli.allow.len(), 2);
        assert!(cli.token.is_none());
        assert!(!cli.log_json);
    }
}
