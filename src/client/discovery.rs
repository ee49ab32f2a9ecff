use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::core::types::TokenRecord;
use crate::metadata::{MetadataClient, TokenOverview};
use crate::prelude::*;
use crate::rpc::RpcClient;

/// Service that aggregates on-chain token accounts with off-chain metadata.
pub struct DiscoveryService {
    rpc: Arc<RpcClient>,
    metadata: Arc<MetadataClient>,
    max_concurrent_lookups: usize,
}

impl DiscoveryService {
    pub fn new(
        rpc: Arc<RpcClient>,
        metadata: Arc<MetadataClient>,
        max_concurrent_lookups: usize,
    ) -> Self {
        Self {
            rpc,
            metadata,
            max_concurrent_lookups,
        }
    }

    /// List the wallet's non-zero token holdings, enriched with metadata.
    ///
    /// Zero balances are fetched but dropped here, client-side. Metadata
    /// lookups fan out concurrently (bounded by config) and all join before
    /// this returns; results keep the node's account order regardless of
    /// lookup completion order. A failed lookup downgrades that record to
    /// placeholder symbol/name instead of failing the whole call.
    pub async fn discover(&self, wallet: &Pubkey) -> CinderResult<Vec<TokenRecord>> {
        let accounts = self.rpc.get_token_accounts_by_owner(wallet).await?;

        let mut holdings: Vec<(Pubkey, f64, u8)> = Vec::new();
        for keyed in accounts {
            let info = keyed.account.data.parsed.info;
            let balance = info.token_amount.ui_amount.unwrap_or(0.0);
            if balance == 0.0 {
                continue;
            }
            let mint: Pubkey = info.mint.parse().map_err(|_| {
                CinderError::Network(format!("invalid mint in node response: {}", info.mint))
            })?;
            holdings.push((mint, balance, info.token_amount.decimals));
        }

        if holdings.is_empty() {
            return Ok(Vec::new());
        }

        debug!(count = holdings.len(), "enriching token holdings");

        // Fan out per-mint lookups, then join in index order so the output
        // matches the node's ordering.
        let semaphore = Arc::new(Semaphore::new(self.max_concurrent_lookups.max(1)));
        let lookups: Vec<JoinHandle<Option<TokenOverview>>> = holdings
            .iter()
            .map(|(mint, _, _)| {
                let metadata = Arc::clone(&self.metadata);
                let semaphore = Arc::clone(&semaphore);
                let mint = *mint;
                tokio::spawn(async move {
                    let _permit = semaphore.acquire_owned().await.ok()?;
                    metadata.token_overview(&mint).await.ok()
                })
            })
            .collect();

        let mut records = Vec::with_capacity(holdings.len());
        for ((mint, balance, decimals), lookup) in holdings.into_iter().zip(lookups) {
            let overview = lookup.await.ok().flatten();
            if overview.is_none() {
                warn!(%mint, "token metadata unavailable, using placeholder");
            }
            let (symbol, name, logo_uri) = match overview {
                Some(overview) => (overview.symbol, overview.name, overview.logo_uri),
                None => (None, None, None),
            };
            records.push(TokenRecord::new(
                mint, balance, decimals, symbol, name, logo_uri,
            ));
        }

        Ok(records)
    }
}
