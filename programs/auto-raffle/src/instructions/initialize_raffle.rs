use anchor_lang::prelude::*;

use crate::state::{
    InitializeRaffleParams, Raffle, RaffleConfig, Treasury, RAFFLE_ACCOUNT_SIZE, RAFFLE_SEED,
    TREASURY_ACCOUNT_SIZE, TREASURY_SEED,
};

/// Event emitted when the raffle is created
#[event]
pub struct RaffleInitialized {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// Fee per entry in lamports
    pub entrance_fee: u64,
    /// Minimum round length in seconds
    pub interval: i64,
    /// Key allowed to deliver randomness
    pub oracle: Pubkey,
    /// When the first round opened
    pub started_at: i64,
}

/// Instruction to create the raffle and its treasury.
/// Called once at deployment; the configuration cannot change afterwards.
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `params` - Entrance fee, interval and randomness channel parameters
///
/// # Account Validations
/// * Raffle - New PDA with seeds ["raffle"]
/// * Treasury - New PDA with seeds ["treasury", raffle_key]
/// * Authority - Pays for both accounts
///
/// # Implementation Notes
/// - Word count and confirmation depth are fixed, not taken from `params`
/// - The first round opens immediately at the current timestamp
pub fn initialize_raffle(
    ctx: Context<InitializeRaffle>,
    params: InitializeRaffleParams,
) -> Result<()> {
    let config = RaffleConfig::from(params);
    config.validate()?;

    let now = Clock::get()?.unix_timestamp;
    let raffle_key = ctx.accounts.raffle.key();

    emit!(RaffleInitialized {
        raffle: raffle_key,
        entrance_fee: config.entrance_fee,
        interval: config.interval,
        oracle: config.oracle,
        started_at: now,
    });

    ctx.accounts
        .raffle
        .set_inner(Raffle::new(config, now, ctx.bumps.raffle));
    ctx.accounts.treasury.raffle = raffle_key;
    ctx.accounts.treasury.bump = ctx.bumps.treasury;

    msg!("Raffle initialized, round 0 open at {}", now);

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeRaffle<'info> {
    #[account(
        init,
        payer = authority,
        space = RAFFLE_ACCOUNT_SIZE,
        seeds = [RAFFLE_SEED],
        bump
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(
        init,
        payer = authority,
        space = TREASURY_ACCOUNT_SIZE,
        seeds = [
            TREASURY_SEED,
            raffle.key().as_ref(),
        ],
        bump,
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}
