//! `neo-transfer`: submits one NEP-17 transfer through a Neo N3 node.

mod cli;
mod commands;
mod logging;

use clap::Parser;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_json)?;

    let output = commands::transfer::execute(&cli).await?;
    println!("{output}");
    Ok(())
}
