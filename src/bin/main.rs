// CLI tool for Cinder
//
// This binary provides a command-line interface to the Cinder SDK: listing a
// wallet's token holdings and burning a chosen amount of one of them with a
// local keypair signer.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cinder")]
#[command(about = "Discover and burn SPL token holdings", long_about = None)]
#[command(version)]
struct Cli {
    /// RPC URL (overrides config file and CINDER_RPC_URL)
    #[arg(long)]
    rpc_url: Option<String>,

    /// Path to a TOML configuration file (defaults to environment variables)
    #[arg(long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List fungible-token holdings for a wallet
    Tokens(commands::tokens::TokensCmd),

    /// Permanently destroy an amount of one token held by the wallet
    Burn(commands::burn::BurnCmd),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = commands::utils::load_config(cli.config.as_deref(), cli.rpc_url)?;

    match cli.command {
        Commands::Tokens(cmd) => commands::tokens::execute(cmd, config).await,
        Commands::Burn(cmd) => commands::burn::execute(cmd, config).await,
    }
}
