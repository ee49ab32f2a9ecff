//! Configuration for the Cinder client
//!
//! Credentials and endpoints are resolved once, at startup, into an explicit
//! `Config` handed to the client constructor. Nothing in the SDK reads the
//! environment after that point.

use serde::{Deserialize, Serialize};

use crate::core::error::{CinderError, CinderResult};

/// Environment variable holding the Solana RPC endpoint.
pub const ENV_RPC_URL: &str = "CINDER_RPC_URL";
/// Environment variable holding the metadata service API key.
pub const ENV_METADATA_API_KEY: &str = "CINDER_METADATA_API_KEY";
/// Environment variable overriding the metadata service endpoint.
pub const ENV_METADATA_URL: &str = "CINDER_METADATA_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rpc_url: String,
    pub commitment: String,
    pub metadata: MetadataConfig,
    pub discovery: DiscoveryConfig,
    pub confirmation: ConfirmationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataConfig {
    pub endpoint: String,
    pub api_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Upper bound on in-flight metadata lookups during discovery.
    pub max_concurrent_lookups: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfirmationConfig {
    pub timeout_secs: u64,
    pub poll_interval_ms: u64,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://public-api.birdeye.so".to_string(),
            api_key: String::new(),
        }
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            max_concurrent_lookups: 8,
        }
    }
}

impl Default for ConfirmationConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 60,
            poll_interval_ms: 500,
        }
    }
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// `CINDER_RPC_URL` and `CINDER_METADATA_API_KEY` are required; a missing
    /// variable is a startup error, not a deferred runtime failure.
    pub fn from_env() -> CinderResult<Self> {
        let rpc_url = std::env::var(ENV_RPC_URL).map_err(|_| {
            CinderError::Config(format!("{ENV_RPC_URL} environment variable is required"))
        })?;
        let api_key = std::env::var(ENV_METADATA_API_KEY).map_err(|_| {
            CinderError::Config(format!(
                "{ENV_METADATA_API_KEY} environment variable is required"
            ))
        })?;

        let mut config = Config {
            rpc_url,
            ..Config::default()
        };
        config.metadata.api_key = api_key;
        if let Ok(endpoint) = std::env::var(ENV_METADATA_URL) {
            config.metadata.endpoint = endpoint;
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &str) -> CinderResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CinderError::Config(format!("failed to read config file {path}: {e}")))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| CinderError::Config(format!("invalid config file {path}: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> CinderResult<()> {
        if self.rpc_url.is_empty() {
            return Err(CinderError::Config("RPC URL cannot be empty".to_string()));
        }
        if self.metadata.endpoint.is_empty() {
            return Err(CinderError::Config(
                "metadata endpoint cannot be empty".to_string(),
            ));
        }
        if self.metadata.api_key.is_empty() {
            return Err(CinderError::Config(
                "metadata API key cannot be empty".to_string(),
            ));
        }
        if !matches!(
            self.commitment.as_str(),
            "processed" | "confirmed" | "finalized"
        ) {
            return Err(CinderError::Config(format!(
                "unknown commitment level: {}",
                self.commitment
            )));
        }
        if self.discovery.max_concurrent_lookups == 0 {
            return Err(CinderError::Config(
                "max_concurrent_lookups must be at least 1".to_string(),
            ));
        }
        if self.confirmation.poll_interval_ms == 0 {
            return Err(CinderError::Config(
                "poll_interval_ms must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rpc_url: "https://api.mainnet-beta.solana.com".to_string(),
            commitment: "confirmed".to_string(),
            metadata: MetadataConfig::default(),
            discovery: DiscoveryConfig::default(),
            confirmation: ConfirmationConfig::default(),
        }
    }
}
