// Utility functions for CLI commands

use anyhow::{Context, Result};
use cinder_sdk::Config;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{read_keypair_file, Keypair},
};
use std::str::FromStr;

/// Resolve the effective configuration: a TOML file when given, the
/// environment otherwise, with an optional RPC URL override on top.
pub fn load_config(config_path: Option<&str>, rpc_url: Option<String>) -> Result<Config> {
    let mut config = match config_path {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env()?,
    };

    if let Some(rpc_url) = rpc_url {
        config.rpc_url = rpc_url;
        config.validate()?;
    }

    Ok(config)
}

/// Load a keypair from a file path, expanding ~ if needed
pub fn load_keypair(path: &str) -> Result<Keypair> {
    let expanded_path = if path.starts_with("~") {
        let home = std::env::var("HOME").context("HOME environment variable not set")?;
        path.replacen("~", &home, 1)
    } else {
        path.to_string()
    };

    read_keypair_file(&expanded_path)
        .map_err(|e| anyhow::anyhow!("Failed to load keypair from {}: {}", expanded_path, e))
}

/// Parse a pubkey from string
pub fn parse_pubkey(s: &str) -> Result<Pubkey> {
    Pubkey::from_str(s).context("Invalid public key")
}

/// Print success message with checkmark
pub fn success(msg: &str) {
    println!("[OK] {}", msg);
}

/// Print info message
pub fn info(msg: &str) {
    println!("[INFO] {}", msg);
}

/// Print warning message
#[allow(dead_code)]
pub fn warn(msg: &str) {
    eprintln!("[WARN] {}", msg);
}
