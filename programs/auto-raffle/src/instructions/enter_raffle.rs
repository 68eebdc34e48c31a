use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{Raffle, Treasury, RAFFLE_SEED, TREASURY_SEED},
};

/// Event emitted when a player enters the current round
#[event]
pub struct EntryRecorded {
    /// The entrant
    pub player: Pubkey,
    /// Lamports paid for this entry
    pub amount: u64,
    /// Pot of the round after this entry
    pub pot: u64,
    /// Entries in the round after this entry
    pub player_count: u64,
    /// Round the entry belongs to
    pub round: u64,
}

/// Instruction to enter the current round by paying at least the entrance fee
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `amount` - Lamports to pay; the whole amount goes into the pot
///
/// # Security Considerations
/// 1. Rejects payments below the entrance fee
/// 2. Rejects entries while a draw is in progress
/// 3. Verifies the treasury belongs to the raffle
/// 4. Checks the treasury balance grew by exactly `amount`
///
/// # Implementation Notes
/// - Each call adds one slot, so repeated entries raise the odds proportionally
/// - Updates state before performing the transfer
pub fn enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
    let player = ctx.accounts.player.key();

    let raffle = &mut ctx.accounts.raffle;
    raffle.enter(player, amount)?;
    let pot = raffle.pot();
    let player_count = raffle.player_count();
    let round = raffle.round;

    // Store pre-transfer balance for verification
    let pre_transfer_balance = ctx.accounts.treasury.to_account_info().lamports();

    anchor_lang::solana_program::program::invoke(
        &anchor_lang::solana_program::system_instruction::transfer(
            &player,
            &ctx.accounts.treasury.key(),
            amount,
        ),
        &[
            ctx.accounts.player.to_account_info(),
            ctx.accounts.system_program.to_account_info(),
            ctx.accounts.treasury.to_account_info(),
        ],
    )?;

    let post_transfer_balance = ctx.accounts.treasury.to_account_info().lamports();
    require!(
        post_transfer_balance
            == pre_transfer_balance
                .checked_add(amount)
                .ok_or(RaffleError::Overflow)?,
        RaffleError::TransferFailed
    );

    emit!(EntryRecorded {
        player,
        amount,
        pot,
        player_count,
        round,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EnterRaffle<'info> {
    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    /// Treasury that receives the entry payment
    #[account(
        mut,
        seeds = [
            TREASURY_SEED,
            raffle.key().as_ref(),
        ],
        bump = treasury.bump,
        has_one = raffle @ RaffleError::InvalidTreasury,
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(mut)]
    pub player: Signer<'info>,

    pub system_program: Program<'info, System>,
}
