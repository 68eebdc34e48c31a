use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{
        PrizeTransfer, Raffle, Treasury, RAFFLE_SEED, TREASURY_ACCOUNT_SIZE, TREASURY_SEED,
    },
};

/// Event emitted when a round is paid out
#[event]
pub struct WinnerPicked {
    /// The winner's address
    pub winner: Pubkey,
    /// Lamports paid to the winner
    pub amount: u64,
    /// Round that was concluded
    pub round: u64,
    /// Randomness request that settled the round
    pub request_id: u64,
}

/// Pays the pot out of the treasury PDA.
struct TreasuryPayout<'info> {
    treasury: AccountInfo<'info>,
    winner: AccountInfo<'info>,
    rent_exempt_minimum: u64,
}

impl PrizeTransfer for TreasuryPayout<'_> {
    fn transfer_prize(&mut self, winner: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(
            self.winner.key(),
            *winner,
            RaffleError::WinnerAccountMismatch
        );

        let available = Treasury::withdrawable(self.treasury.lamports(), self.rent_exempt_minimum);
        require!(amount <= available, RaffleError::TransferFailed);

        // Direct lamport move; the treasury is a PDA owned by this program.
        self.treasury.sub_lamports(amount)?;
        self.winner.add_lamports(amount)?;
        Ok(())
    }
}

/// Oracle callback delivering the random words for a pending request.
/// Picks `players[words[0] mod player_count]`, pays it the whole pot and
/// opens the next round.
///
/// # Arguments
/// * `ctx` - The context object containing:
///   - `raffle`: The raffle in Calculating state
///   - `treasury`: The PDA holding the pot
///   - `oracle`: Must be the oracle key stored in the raffle config
///   - `winner`: The account of the drawn player
/// * `request_id` - Correlation id from the `DrawTriggered` event
/// * `random_words` - 32-byte big-endian random values, one per requested word
///
/// # Errors
/// - `OnlyOracleCanFulfill` if the signer is not the configured oracle
/// - `UnknownRequest` if `request_id` is not the pending request
/// - `RandomWordsMismatch` if the number of words differs from the request
/// - `TransferFailed` if the pot could not be delivered to `winner`
pub fn fulfill_random_words(
    ctx: Context<FulfillRandomWords>,
    request_id: u64,
    random_words: Vec<[u8; 32]>,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let mut payout = TreasuryPayout {
        treasury: ctx.accounts.treasury.to_account_info(),
        winner: ctx.accounts.winner.to_account_info(),
        rent_exempt_minimum: Rent::get()?.minimum_balance(TREASURY_ACCOUNT_SIZE),
    };

    let outcome = ctx
        .accounts
        .raffle
        .conclude_draw(request_id, random_words, now, &mut payout)?;

    msg!(
        "Round {} won by {} for {} lamports",
        outcome.round,
        outcome.winner,
        outcome.amount
    );

    emit!(WinnerPicked {
        winner: outcome.winner,
        amount: outcome.amount,
        round: outcome.round,
        request_id: outcome.request_id,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct FulfillRandomWords<'info> {
    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
        constraint = raffle.config.oracle == oracle.key() @ RaffleError::OnlyOracleCanFulfill,
    )]
    pub raffle: Account<'info, Raffle>,

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

    pub oracle: Signer<'info>,

    /// The drawn player receiving the pot
    /// CHECK: Matched against the drawn winner inside the instruction.
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,
}
