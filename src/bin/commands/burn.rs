// Burn command

use anyhow::{Context, Result};
use cinder_sdk::signer::{KeypairSigner, TransactionSigner};
use cinder_sdk::{BurnRequest, CinderClient, Config};
use clap::Args;

use super::utils::{info, load_keypair, parse_pubkey, success};

#[derive(Args)]
pub struct BurnCmd {
    /// Mint address of the token to burn
    #[arg(long)]
    mint: String,

    /// Human-scaled amount to burn
    #[arg(long, conflicts_with = "max")]
    amount: Option<f64>,

    /// Burn the entire discovered balance
    #[arg(long)]
    max: bool,

    /// Path to wallet keypair file
    #[arg(long, default_value = "~/.config/solana/id.json")]
    wallet: String,
}

pub async fn execute(cmd: BurnCmd, config: Config) -> Result<()> {
    let mint = parse_pubkey(&cmd.mint)?;
    let keypair = load_keypair(&cmd.wallet)?;
    let signer = KeypairSigner::new(keypair);
    let owner = signer.pubkey();

    let client = CinderClient::new(config)?;

    // The discovered balance is the ceiling the burn is validated against;
    // the burn itself does not re-read chain state.
    info(&format!("Looking up {mint} in wallet {owner}..."));
    let records = client.discovery.discover(&owner).await?;
    let holding = records
        .iter()
        .find(|record| record.mint == mint)
        .with_context(|| format!("wallet holds no balance of mint {mint}"))?;

    let amount = if cmd.max {
        holding.balance
    } else {
        cmd.amount.context("either --amount or --max is required")?
    };

    info(&format!(
        "Burning {amount} {} ({}) out of {}...",
        holding.symbol, mint, holding.balance
    ));

    let request = BurnRequest {
        mint,
        amount,
        decimals: holding.decimals,
    };
    let signature = client
        .burn
        .burn(&owner, &request, holding.balance, &signer)
        .await
        .context("Burn failed")?;

    success(&format!("Burned {amount} {}", holding.symbol));
    info(&format!("Signature: {signature}"));
    info(&format!(
        "View on Solscan: https://solscan.io/tx/{signature}"
    ));

    Ok(())
}
