pub mod burn;
pub mod discovery;

use std::sync::Arc;

use crate::core::config::Config;
use crate::core::error::CinderResult;
use crate::metadata::MetadataClient;
use crate::rpc::RpcClient;

pub use burn::BurnService;
pub use discovery::DiscoveryService;

/// Main client with service-based architecture
///
/// Both services share one RPC client; discovery additionally holds the
/// metadata client. Each invocation owns its own request state, so a single
/// client can serve concurrent discovery and burn calls.
pub struct CinderClient {
    /// Base RPC client
    pub rpc: Arc<RpcClient>,
    /// Metadata overview client
    pub metadata: Arc<MetadataClient>,
    /// Token discovery service
    pub discovery: DiscoveryService,
    /// Burn execution service
    pub burn: BurnService,
}

impl CinderClient {
    /// Create a client from a validated configuration.
    ///
    /// Configuration problems (missing credential, bad commitment level)
    /// surface here, before any request is made.
    pub fn new(config: Config) -> CinderResult<Self> {
        config.validate()?;

        let rpc = Arc::new(RpcClient::new(&config));
        let metadata = Arc::new(MetadataClient::new(&config.metadata));

        Ok(Self {
            discovery: DiscoveryService::new(
                Arc::clone(&rpc),
                Arc::clone(&metadata),
                config.discovery.max_concurrent_lookups,
            ),
            burn: BurnService::new(Arc::clone(&rpc)),
            rpc,
            metadata,
        })
    }
}
