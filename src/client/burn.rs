use std::sync::Arc;

use solana_sdk::{signature::Signature, transaction::Transaction};
use tracing::debug;

use crate::core::types::BurnRequest;
use crate::instructions::{burn_instruction, to_base_units};
use crate::prelude::*;
use crate::rpc::RpcClient;
use crate::signer::TransactionSigner;

/// Service that executes token burns.
pub struct BurnService {
    rpc: Arc<RpcClient>,
}

impl BurnService {
    pub fn new(rpc: Arc<RpcClient>) -> Self {
        Self { rpc }
    }

    /// Burn `request.amount` of `request.mint` from the owner's associated
    /// token account and wait for the `confirmed` commitment level.
    ///
    /// `available` is the balance the caller saw at selection time; the
    /// amount is validated against it before any network call, and live
    /// chain state is not re-checked. The signer may decline, which
    /// surfaces as [`CinderError::UserRejected`] without submitting
    /// anything. No step is retried; the first failure propagates.
    pub async fn burn(
        &self,
        owner: &Pubkey,
        request: &BurnRequest,
        available: f64,
        signer: &dyn TransactionSigner,
    ) -> CinderResult<Signature> {
        if !request.amount.is_finite() || request.amount <= 0.0 {
            return Err(CinderError::Validation(format!(
                "burn amount must be positive, got {}",
                request.amount
            )));
        }
        if request.amount > available {
            return Err(CinderError::Validation(format!(
                "burn amount {} exceeds available balance {}",
                request.amount, available
            )));
        }

        let base_amount = to_base_units(request.amount, request.decimals)?;
        let (token_account, ix) = burn_instruction(owner, &request.mint, base_amount)?;

        debug!(%token_account, base_amount, "built burn instruction");

        let blockhash = self.rpc.get_latest_blockhash().await?;
        let mut transaction = Transaction::new_with_payer(&[ix], Some(owner));
        transaction.message.recent_blockhash = blockhash;

        let signed = signer.sign_transaction(transaction)?;

        let signature = self.rpc.send_transaction(&signed).await?;
        self.rpc.confirm_transaction(&signature).await?;

        Ok(signature)
    }
}
