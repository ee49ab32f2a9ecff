//! Domain records shared across discovery and burn

use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

/// Placeholder symbol when the metadata service has nothing for a mint.
pub const UNKNOWN_SYMBOL: &str = "UNKNOWN";
/// Placeholder display name when the metadata service has nothing for a mint.
pub const UNKNOWN_NAME: &str = "Unknown Token";

/// One fungible-token holding in a wallet.
///
/// Built fresh on every discovery call and never mutated; a refresh replaces
/// the whole list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenRecord {
    /// Token mint address
    pub mint: Pubkey,
    /// Human-scaled balance (already divided by 10^decimals)
    pub balance: f64,
    /// Decimal precision of the mint
    pub decimals: u8,
    /// Token symbol (e.g. "USDC"), or [`UNKNOWN_SYMBOL`]
    pub symbol: String,
    /// Token display name, or [`UNKNOWN_NAME`]
    pub name: String,
    /// Logo image URI, if the metadata service knows one
    pub logo_uri: Option<String>,
}

impl TokenRecord {
    /// Create a record, falling back to the placeholder symbol/name for
    /// missing metadata fields.
    pub fn new(
        mint: Pubkey,
        balance: f64,
        decimals: u8,
        symbol: Option<String>,
        name: Option<String>,
        logo_uri: Option<String>,
    ) -> Self {
        Self {
            mint,
            balance,
            decimals,
            symbol: symbol.unwrap_or_else(|| UNKNOWN_SYMBOL.to_string()),
            name: name.unwrap_or_else(|| UNKNOWN_NAME.to_string()),
            logo_uri,
        }
    }

    /// Format the balance with its symbol for display.
    pub fn formatted_balance(&self) -> String {
        format!("{} {}", self.balance, self.symbol)
    }
}

/// Transient input for one burn call. Not persisted anywhere.
#[derive(Debug, Clone)]
pub struct BurnRequest {
    /// Mint of the token to burn
    pub mint: Pubkey,
    /// Human-scaled amount to destroy
    pub amount: f64,
    /// Decimal precision used to scale `amount` to base units
    pub decimals: u8,
}
