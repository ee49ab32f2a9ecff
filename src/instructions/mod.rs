//! Burn instruction assembly

use solana_sdk::instruction::Instruction;
use spl_associated_token_account::get_associated_token_address;

use crate::core::error::{CinderError, CinderResult};
use crate::prelude::Pubkey;

/// Convert a human-scaled amount to base units: `round(amount * 10^decimals)`.
///
/// UI-level amounts arrive already display-rounded; rounding to the nearest
/// base unit is the accepted precision tradeoff.
pub fn to_base_units(amount: f64, decimals: u8) -> CinderResult<u64> {
    let scaled = (amount * 10f64.powi(decimals as i32)).round();
    if !scaled.is_finite() || scaled < 0.0 || scaled > u64::MAX as f64 {
        return Err(CinderError::Validation(format!(
            "amount {amount} does not fit in base units at {decimals} decimals"
        )));
    }
    Ok(scaled as u64)
}

/// Build the single burn instruction for `base_amount` of `mint` out of the
/// owner's associated token account. Returns the derived account alongside
/// the instruction.
pub fn burn_instruction(
    owner: &Pubkey,
    mint: &Pubkey,
    base_amount: u64,
) -> CinderResult<(Pubkey, Instruction)> {
    let token_account = get_associated_token_address(owner, mint);

    let ix = spl_token::instruction::burn(
        &spl_token::id(),
        &token_account,
        mint,
        owner,
        &[],
        base_amount,
    )
    .map_err(|e| CinderError::Transaction(format!("failed to build burn instruction: {e}")))?;

    Ok((token_account, ix))
}
