use anchor_lang::prelude::*;

use crate::state::{Raffle, RaffleConfig, RandomnessOracle, RAFFLE_SEED};

/// Event emitted when a round is closed and randomness is requested
#[event]
pub struct DrawTriggered {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// Correlation id the oracle must answer with
    pub request_id: u64,
    /// Round being drawn
    pub round: u64,
    /// Entries taking part in the draw
    pub player_count: u64,
    /// Lamports that will be paid out
    pub pot: u64,
}

/// Request picked up by the off-chain oracle
#[event]
pub struct RandomWordsRequested {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    pub request_id: u64,
    pub key_hash: [u8; 32],
    pub subscription_id: u64,
    pub request_confirmations: u16,
    pub callback_gas_limit: u32,
    pub num_words: u32,
}

/// Hands randomness requests to the oracle by logging them as events.
pub struct EventOracle {
    pub raffle: Pubkey,
}

impl RandomnessOracle for EventOracle {
    fn request_random_words(&mut self, request_id: u64, config: &RaffleConfig) -> Result<()> {
        emit!(RandomWordsRequested {
            raffle: self.raffle,
            request_id,
            key_hash: config.key_hash,
            subscription_id: config.subscription_id,
            request_confirmations: config.request_confirmations,
            callback_gas_limit: config.callback_gas_limit,
            num_words: config.num_words,
        });
        Ok(())
    }
}

/// Triggers the draw for the current round.
/// Anyone may call this; it only succeeds when `check_upkeep` would return true.
///
/// After execution:
/// - The raffle is in Calculating state and rejects new entries
/// - A randomness request is pending under a fresh correlation id
///
/// # Errors
/// - `UpkeepNotNeeded` if the raffle is not open, the interval has not passed,
///   or there are no entries
pub fn perform_upkeep(ctx: Context<PerformUpkeep>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let raffle_key = ctx.accounts.raffle.key();
    let raffle = &mut ctx.accounts.raffle;

    let mut oracle = EventOracle { raffle: raffle_key };
    let request_id = raffle.trigger_draw(now, &mut oracle)?;

    msg!("Requested randomness {} for round {}", request_id, raffle.round);

    emit!(DrawTriggered {
        raffle: raffle_key,
        request_id,
        round: raffle.round,
        player_count: raffle.player_count(),
        pot: raffle.pot(),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct PerformUpkeep<'info> {
    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    /// The automation actor submitting the transaction
    pub caller: Signer<'info>,
}
