//! Cinder SDK: discover and burn SPL token holdings.
//!
//! Two operations make up the public surface:
//! - token discovery: query a wallet's token accounts, drop empty positions,
//!   and enrich the rest with off-chain symbol/name/logo metadata
//! - burn execution: build, sign and submit a single SPL burn instruction,
//!   then wait for the `confirmed` commitment level
//!
//! The crate ships a lightweight ureq-based JSON-RPC client instead of
//! pulling in `solana-client`, and a `cinder` CLI binary on top.

pub mod client;
pub mod core;
pub mod instructions;
pub mod metadata;
pub mod prelude;
pub mod rpc;
pub mod signer;

pub use client::{BurnService, CinderClient, DiscoveryService};
pub use crate::core::config::Config;
pub use crate::core::error::{CinderError, CinderResult};
pub use crate::core::types::{BurnRequest, TokenRecord};
