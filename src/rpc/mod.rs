//! Lightweight Solana RPC client
//!
//! Implements only the methods the SDK actually needs, over ureq, avoiding
//! the heavy dependency chain of solana-client. Requests run on the blocking
//! thread pool so the async surface stays non-blocking.

pub mod types;

use std::time::Duration;

use base64::Engine;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use solana_sdk::{hash::Hash, signature::Signature, transaction::Transaction};
use tracing::debug;

use crate::core::config::{Config, ConfirmationConfig};
use crate::core::error::{CinderError, CinderResult};
use crate::prelude::Pubkey;
use types::{KeyedTokenAccount, LatestBlockhash, RpcContext, RpcResponse, SignatureStatus};

/// Outcome of one JSON-RPC round trip, before it is mapped onto the
/// caller-facing error taxonomy. Transport covers unreachable endpoints,
/// non-2xx statuses and undecodable bodies; Rpc is an error the node itself
/// reported.
enum CallError {
    Transport(String),
    Rpc { code: i64, message: String },
}

impl CallError {
    fn into_network(self) -> CinderError {
        match self {
            CallError::Transport(message) => CinderError::Network(message),
            CallError::Rpc { code, message } => {
                CinderError::Network(format!("RPC error {code}: {message}"))
            }
        }
    }
}

/// Minimal JSON-RPC client for the node methods the SDK consumes.
pub struct RpcClient {
    url: String,
    commitment: String,
    confirmation: ConfirmationConfig,
    agent: ureq::Agent,
}

impl RpcClient {
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(10))
            .timeout_read(Duration::from_secs(30))
            .build();

        Self {
            url: config.rpc_url.clone(),
            commitment: config.commitment.clone(),
            confirmation: config.confirmation.clone(),
            agent,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Make a JSON-RPC call
    async fn call<T>(&self, method: &'static str, params: Value) -> Result<T, CallError>
    where
        T: DeserializeOwned,
    {
        let request_body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params
        });

        debug!("RPC call: {}", method);

        // ureq is sync, so hop onto the blocking pool
        let response_body = tokio::task::spawn_blocking({
            let agent = self.agent.clone();
            let url = self.url.clone();
            let body = request_body.to_string();

            move || -> Result<String, ureq::Error> {
                let response = agent
                    .post(&url)
                    .set("Content-Type", "application/json")
                    .send_string(&body)?;

                Ok(response.into_string()?)
            }
        })
        .await
        .map_err(|e| CallError::Transport(format!("{method} task failed: {e}")))?
        .map_err(|e| CallError::Transport(format!("{method} request failed: {e}")))?;

        let rpc_response: RpcResponse<T> = serde_json::from_str(&response_body)
            .map_err(|e| CallError::Transport(format!("invalid {method} response: {e}")))?;

        if let Some(error) = rpc_response.error {
            return Err(CallError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        rpc_response
            .result
            .ok_or_else(|| CallError::Transport(format!("no result in {method} response")))
    }

    /// Get all SPL token accounts owned by a wallet, in node order.
    ///
    /// Uses `jsonParsed` encoding so balances arrive already decoded. An
    /// empty wallet yields an empty vec, not an error.
    pub async fn get_token_accounts_by_owner(
        &self,
        owner: &Pubkey,
    ) -> CinderResult<Vec<KeyedTokenAccount>> {
        let params = json!([
            owner.to_string(),
            { "programId": spl_token::id().to_string() },
            {
                "encoding": "jsonParsed",
                "commitment": self.commitment
            }
        ]);

        let response: RpcContext<Vec<KeyedTokenAccount>> = self
            .call("getTokenAccountsByOwner", params)
            .await
            .map_err(CallError::into_network)?;

        Ok(response.value)
    }

    /// Get the latest blockhash at the configured commitment.
    pub async fn get_latest_blockhash(&self) -> CinderResult<Hash> {
        let params = json!([{ "commitment": self.commitment }]);

        let response: RpcContext<LatestBlockhash> = self
            .call("getLatestBlockhash", params)
            .await
            .map_err(CallError::into_network)?;

        response
            .value
            .blockhash
            .parse()
            .map_err(|e| CinderError::Network(format!("failed to parse blockhash: {e}")))
    }

    /// Submit a signed transaction.
    ///
    /// A node-reported rejection (failed preflight, invalid blockhash, ...)
    /// is a transaction error; failing to reach the node at all is a network
    /// error.
    pub async fn send_transaction(&self, transaction: &Transaction) -> CinderResult<Signature> {
        let serialized = bincode::serialize(transaction)
            .map_err(|e| CinderError::Transaction(format!("failed to serialize transaction: {e}")))?;
        let encoded = base64::engine::general_purpose::STANDARD.encode(&serialized);

        let params = json!([
            encoded,
            {
                "encoding": "base64",
                "preflightCommitment": self.commitment
            }
        ]);

        let signature: String = self
            .call("sendTransaction", params)
            .await
            .map_err(|e| match e {
                CallError::Transport(message) => CinderError::Network(message),
                CallError::Rpc { code, message } => {
                    CinderError::Transaction(format!("node rejected transaction ({code}): {message}"))
                }
            })?;

        signature
            .parse()
            .map_err(|e| CinderError::Network(format!("failed to parse signature: {e}")))
    }

    /// Block until a submitted transaction reaches the `confirmed` level.
    ///
    /// Polls `getSignatureStatuses` at the configured interval. An on-chain
    /// error or an expired confirmation window surfaces as a transaction
    /// error; the transaction is never resubmitted.
    pub async fn confirm_transaction(&self, signature: &Signature) -> CinderResult<()> {
        let deadline = tokio::time::Instant::now()
            + Duration::from_secs(self.confirmation.timeout_secs);
        let interval = Duration::from_millis(self.confirmation.poll_interval_ms);

        loop {
            let params = json!([
                [signature.to_string()],
                { "searchTransactionHistory": true }
            ]);

            let response: RpcContext<Vec<Option<SignatureStatus>>> = self
                .call("getSignatureStatuses", params)
                .await
                .map_err(|e| match e {
                    CallError::Transport(message) => CinderError::Network(message),
                    CallError::Rpc { code, message } => CinderError::Transaction(format!(
                        "status query failed ({code}): {message}"
                    )),
                })?;

            if let Some(status) = response.value.into_iter().next().flatten() {
                if let Some(err) = &status.err {
                    return Err(CinderError::Transaction(format!(
                        "transaction {signature} failed on chain: {err}"
                    )));
                }
                if status.is_confirmed() {
                    debug!(%signature, slot = status.slot, "transaction confirmed");
                    return Ok(());
                }
            }

            if tokio::time::Instant::now() >= deadline {
                return Err(CinderError::Transaction(format!(
                    "transaction {signature} was not confirmed within {}s",
                    self.confirmation.timeout_secs
                )));
            }

            tokio::time::sleep(interval).await;
        }
    }
}
