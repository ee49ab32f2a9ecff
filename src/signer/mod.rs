//! Transaction signing capability
//!
//! The burn path never touches key material directly; it hands an unsigned
//! transaction to whatever implements [`TransactionSigner`]. A signer may
//! refuse, and a refusal is reported distinctly from a signing failure.

use solana_sdk::{
    signature::Keypair,
    signer::Signer,
    transaction::Transaction,
};
use thiserror::Error;

use crate::core::error::CinderError;
use crate::prelude::Pubkey;

#[derive(Error, Debug)]
pub enum SignerError {
    #[error("signature request rejected")]
    Rejected,

    #[error("signing failed: {0}")]
    Failed(String),
}

impl From<SignerError> for CinderError {
    fn from(err: SignerError) -> Self {
        match err {
            SignerError::Rejected => CinderError::UserRejected,
            SignerError::Failed(message) => CinderError::Transaction(message),
        }
    }
}

/// External signing capability, e.g. a connected wallet or a local keypair.
pub trait TransactionSigner {
    /// Address the signer signs for (the fee payer and burn authority).
    fn pubkey(&self) -> Pubkey;

    /// Sign the transaction, or decline.
    fn sign_transaction(&self, transaction: Transaction) -> Result<Transaction, SignerError>;
}

/// Signer backed by a local keypair, used by the CLI.
pub struct KeypairSigner {
    keypair: Keypair,
}

impl KeypairSigner {
    pub fn new(keypair: Keypair) -> Self {
        Self { keypair }
    }
}

impl TransactionSigner for KeypairSigner {
    fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    fn sign_transaction(&self, mut transaction: Transaction) -> Result<Transaction, SignerError> {
        let blockhash = transaction.message.recent_blockhash;
        transaction
            .try_sign(&[&self.keypair], blockhash)
            .map_err(|e| SignerError::Failed(e.to_string()))?;
        Ok(transaction)
    }
}
