//! Prelude module for common imports
//!
//! Everything the SDK needs from the Solana stack comes from solana-sdk;
//! crate-local error types ride along since every module uses them.

pub use solana_sdk::pubkey::Pubkey;

pub use crate::core::error::{CinderError, CinderResult};
