use anchor_lang::prelude::*;

use crate::state::{Raffle, RAFFLE_SEED};

/// Read-only instruction polled by the automation actor.
/// Returns true when `perform_upkeep` would succeed at the current timestamp.
pub fn check_upkeep(ctx: Context<CheckUpkeep>) -> Result<bool> {
    let now = Clock::get()?.unix_timestamp;
    Ok(ctx.accounts.raffle.check_upkeep_needed(now))
}

#[derive(Accounts)]
pub struct CheckUpkeep<'info> {
    #[account(
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,
}
