use anchor_lang::prelude::*;

use crate::state::{Raffle, RAFFLE_SEED};

/// Returns the entrant stored at `index` in the current round.
pub fn get_player(ctx: Context<GetPlayer>, index: u64) -> Result<Pubkey> {
    ctx.accounts.raffle.player(index)
}

#[derive(Accounts)]
pub struct GetPlayer<'info> {
    #[account(
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,
}
