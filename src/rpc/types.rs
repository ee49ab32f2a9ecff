//! Typed JSON-RPC response shapes
//!
//! Every RPC body the client consumes has an explicit schema here; a body
//! that fails to decode is treated as a network-level failure rather than
//! being walked as loose JSON.

use serde::Deserialize;

/// RPC response wrapper
#[derive(Debug, Deserialize)]
pub struct RpcResponse<T> {
    pub result: Option<T>,
    pub error: Option<RpcErrorObject>,
}

/// RPC error structure
#[derive(Debug, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
}

/// Wrapper for responses that carry a slot context alongside the value
#[derive(Debug, Deserialize)]
pub struct RpcContext<T> {
    pub value: T,
}

/// One entry from `getTokenAccountsByOwner` with `jsonParsed` encoding
#[derive(Debug, Deserialize)]
pub struct KeyedTokenAccount {
    pub pubkey: String,
    pub account: ParsedAccount,
}

#[derive(Debug, Deserialize)]
pub struct ParsedAccount {
    pub data: ParsedAccountData,
}

#[derive(Debug, Deserialize)]
pub struct ParsedAccountData {
    pub parsed: ParsedTokenData,
    pub program: String,
}

#[derive(Debug, Deserialize)]
pub struct ParsedTokenData {
    pub info: TokenAccountInfo,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenAccountInfo {
    pub mint: String,
    pub owner: String,
    pub token_amount: TokenAmount,
}

/// Token amount as reported by the node; `ui_amount` is null for some
/// frozen/extension accounts, which callers treat as zero.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenAmount {
    pub amount: String,
    pub decimals: u8,
    pub ui_amount: Option<f64>,
    pub ui_amount_string: String,
}

/// Value of a `getLatestBlockhash` response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestBlockhash {
    pub blockhash: String,
    pub last_valid_block_height: u64,
}

/// One entry of a `getSignatureStatuses` response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureStatus {
    pub slot: u64,
    pub confirmations: Option<u64>,
    pub err: Option<serde_json::Value>,
    pub confirmation_status: Option<String>,
}

impl SignatureStatus {
    /// Whether the status has reached at least the `confirmed` level.
    pub fn is_confirmed(&self) -> bool {
        matches!(
            self.confirmation_status.as_deref(),
            Some("confirmed") | Some("finalized")
        )
    }
}
