//! Token overview client
//!
//! Fetches descriptive metadata (symbol, name, logo) for a mint from the
//! configured overview endpoint. Callers decide what a failed lookup means;
//! discovery downgrades it to placeholder values instead of failing.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::core::config::MetadataConfig;
use crate::core::error::{CinderError, CinderResult};
use crate::prelude::Pubkey;

/// Descriptive metadata for one mint. Individual fields may be absent even
/// when the lookup itself succeeds.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenOverview {
    pub symbol: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "logoURI")]
    pub logo_uri: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OverviewResponse {
    data: Option<TokenOverview>,
}

/// HTTP client for the token overview endpoint.
pub struct MetadataClient {
    endpoint: String,
    api_key: String,
    agent: ureq::Agent,
}

impl MetadataClient {
    pub fn new(config: &MetadataConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(5))
            .timeout_read(Duration::from_secs(15))
            .build();

        Self {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            agent,
        }
    }

    /// Fetch the overview for one mint.
    ///
    /// Transport failures, non-2xx statuses and undecodable bodies all map
    /// to a network error.
    pub async fn token_overview(&self, mint: &Pubkey) -> CinderResult<TokenOverview> {
        let url = format!("{}/defi/token_overview", self.endpoint);

        debug!(%mint, "fetching token overview");

        let response = tokio::task::spawn_blocking({
            let agent = self.agent.clone();
            let api_key = self.api_key.clone();
            let mint = mint.to_string();

            move || -> Result<OverviewResponse, String> {
                let response = agent
                    .get(&url)
                    .set("X-API-KEY", &api_key)
                    .query("address", &mint)
                    .call()
                    .map_err(|e| format!("overview request failed: {e}"))?;

                response
                    .into_json::<OverviewResponse>()
                    .map_err(|e| format!("invalid overview response: {e}"))
            }
        })
        .await
        .map_err(|e| CinderError::Network(format!("overview task failed: {e}")))?
        .map_err(CinderError::Network)?;

        response
            .data
            .ok_or_else(|| CinderError::Network(format!("no overview data for mint {mint}")))
    }
}
