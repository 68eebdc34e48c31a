use anchor_lang::prelude::*;
use arrayref::array_ref;

use crate::{
    error::RaffleError,
    state::{
        EntryLedger, RaffleConfig, RandomWord, RandomnessCorrelator, RandomnessOracle,
        CORRELATOR_SIZE, ENTRY_LEDGER_SIZE, RAFFLE_CONFIG_SIZE,
    },
};

pub const RAFFLE_SEED: &[u8] = b"raffle";

// Space calculation:
// 8 (discriminator) +
// RAFFLE_CONFIG_SIZE (config) +
// 1 (raffle_state) +
// 8 (round) +
// 8 (round_started_at) +
// ENTRY_LEDGER_SIZE (ledger) +
// CORRELATOR_SIZE (correlator) +
// 33 (recent_winner: Option<Pubkey>) +
// 8 (amount_paid) +
// 1 (bump)
pub const RAFFLE_ACCOUNT_SIZE: usize =
    8 + RAFFLE_CONFIG_SIZE + 1 + 8 + 8 + ENTRY_LEDGER_SIZE + CORRELATOR_SIZE + 33 + 8 + 1;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq)]
pub enum RaffleState {
    Open = 0,
    Calculating = 1,
}

/// Moves the round pot to the drawn winner.
pub trait PrizeTransfer {
    fn transfer_prize(&mut self, winner: &Pubkey, amount: u64) -> Result<()>;
}

/// What a successful `conclude_draw` paid out.
#[derive(Debug, PartialEq)]
pub struct DrawOutcome {
    pub winner: Pubkey,
    pub amount: u64,
    pub round: u64,
    pub request_id: u64,
}

#[account]
pub struct Raffle {
    pub config: RaffleConfig,
    pub raffle_state: RaffleState,
    /// Number of rounds concluded so far; also the id of the live round.
    pub round: u64,
    pub round_started_at: i64,
    pub ledger: EntryLedger,
    pub correlator: RandomnessCorrelator,
    pub recent_winner: Option<Pubkey>,
    pub amount_paid: u64,
    pub bump: u8,
}

impl Raffle {
    pub fn new(config: RaffleConfig, now: i64, bump: u8) -> Self {
        Self {
            config,
            raffle_state: RaffleState::Open,
            round: 0,
            round_started_at: now,
            ledger: EntryLedger::default(),
            correlator: RandomnessCorrelator::default(),
            recent_winner: None,
            amount_paid: 0,
            bump,
        }
    }

    /// Adds one entry for `player`. The fee is checked before the round state.
    pub fn enter(&mut self, player: Pubkey, amount_paid: u64) -> Result<()> {
        require!(
            amount_paid >= self.config.entrance_fee,
            RaffleError::NotEnoughPaid
        );
        require!(
            self.raffle_state == RaffleState::Open,
            RaffleError::NotOpen
        );
        self.ledger.record(player, amount_paid)
    }

    /// True when the automation actor may trigger a draw at `now`.
    pub fn check_upkeep_needed(&self, now: i64) -> bool {
        let is_open = self.raffle_state == RaffleState::Open;
        let interval_elapsed = now
            .checked_sub(self.round_started_at)
            .map_or(false, |elapsed| elapsed >= self.config.interval);
        let has_players = !self.ledger.is_empty();
        let has_pot = self.ledger.pot > 0;

        is_open && interval_elapsed && has_players && has_pot
    }

    /// Closes the round to entries and asks the oracle for randomness.
    /// Returns the correlation id of the issued request.
    pub fn trigger_draw<O: RandomnessOracle>(&mut self, now: i64, oracle: &mut O) -> Result<u64> {
        if !self.check_upkeep_needed(now) {
            msg!(
                "Upkeep not needed: pot {}, players {}, state {:?}",
                self.ledger.pot,
                self.ledger.len(),
                self.raffle_state
            );
            return err!(RaffleError::UpkeepNotNeeded);
        }

        let request_id = self.correlator.issue(self.round, &self.config, oracle)?;
        self.raffle_state = RaffleState::Calculating;
        Ok(request_id)
    }

    /// Settles the round `request_id` was issued for.
    ///
    /// The correlator entry is consumed first. If the prize transfer then fails
    /// the round is left untouched in `Calculating`, with nothing pending.
    /// On-chain the failed instruction is rolled back as a whole, so the
    /// request is still pending afterwards and may be delivered again.
    pub fn conclude_draw<T: PrizeTransfer>(
        &mut self,
        request_id: u64,
        random_words: Vec<RandomWord>,
        now: i64,
        transfer: &mut T,
    ) -> Result<DrawOutcome> {
        let resolved = self.correlator.resolve(request_id, random_words)?;
        require!(resolved.round == self.round, RaffleError::UnknownRequest);

        let word = resolved
            .random_words
            .first()
            .ok_or(RaffleError::RandomWordsMismatch)?;
        let index = winner_index(word, self.ledger.len())?;
        let winner = self.ledger.players[index];
        let amount = self.ledger.pot;
        let next_round = self.round.checked_add(1).ok_or(RaffleError::Overflow)?;

        if let Err(e) = transfer.transfer_prize(&winner, amount) {
            msg!("Prize transfer of {} to {} failed: {}", amount, winner, e);
            return err!(RaffleError::TransferFailed);
        }

        let outcome = DrawOutcome {
            winner,
            amount,
            round: self.round,
            request_id,
        };

        self.recent_winner = Some(winner);
        self.amount_paid = amount;
        self.ledger.clear();
        self.round_started_at = now;
        self.round = next_round;
        self.raffle_state = RaffleState::Open;

        Ok(outcome)
    }

    pub fn entrance_fee(&self) -> u64 {
        self.config.entrance_fee
    }

    pub fn interval(&self) -> i64 {
        self.config.interval
    }

    pub fn num_words(&self) -> u32 {
        self.config.num_words
    }

    pub fn request_confirmations(&self) -> u16 {
        self.config.request_confirmations
    }

    pub fn player(&self, index: u64) -> Result<Pubkey> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.ledger.player(index))
            .copied()
            .ok_or_else(|| error!(RaffleError::PlayerIndexOutOfBounds))
    }

    pub fn player_count(&self) -> u64 {
        self.ledger.len() as u64
    }

    pub fn pot(&self) -> u64 {
        self.ledger.pot
    }

    pub fn pending_request_id(&self) -> Option<u64> {
        self.correlator.pending_request_id()
    }
}

/// `word mod player_count`, computed over the full 256-bit big-endian word.
pub fn winner_index(word: &RandomWord, player_count: usize) -> Result<usize> {
    require!(player_count > 0, RaffleError::NoPlayers);
    let modulus = player_count as u128;

    let mut remainder: u128 = 0;
    for limb in 0..4 {
        let bytes = array_ref![word, limb * 8, 8];
        remainder = ((remainder << 64) | u64::from_be_bytes(*bytes) as u128) % modulus;
    }

    Ok(remainder as usize)
}
