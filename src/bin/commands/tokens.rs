// Token listing command

use anyhow::Result;
use cinder_sdk::{CinderClient, Config};
use clap::Args;

use super::utils::{info, parse_pubkey, success};

#[derive(Args)]
pub struct TokensCmd {
    /// Wallet address to inspect
    wallet: String,

    /// Emit the holdings as JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub async fn execute(cmd: TokensCmd, config: Config) -> Result<()> {
    let wallet = parse_pubkey(&cmd.wallet)?;
    let client = CinderClient::new(config)?;

    info(&format!("Fetching token accounts for {wallet}..."));

    let records = client.discovery.discover(&wallet).await?;

    if records.is_empty() {
        info("No tokens with a non-zero balance in this wallet");
        return Ok(());
    }

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    println!(
        "{:<12} {:>20} {:>4}  {:<44}  {}",
        "SYMBOL", "BALANCE", "DEC", "MINT", "NAME"
    );
    for record in &records {
        println!(
            "{:<12} {:>20} {:>4}  {:<44}  {}",
            record.symbol,
            record.balance,
            record.decimals,
            record.mint.to_string(),
            record.name
        );
    }

    success(&format!("{} token(s) held", records.len()));

    Ok(())
}
