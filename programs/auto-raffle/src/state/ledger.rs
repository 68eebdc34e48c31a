use anchor_lang::prelude::*;

use crate::error::RaffleError;

/// Upper bound on entries per round, fixed by the raffle account size.
pub const MAX_PLAYERS: usize = 128;

// 4 (vec length) + 32 * MAX_PLAYERS (players) + 8 (pot)
pub const ENTRY_LEDGER_SIZE: usize = 4 + 32 * MAX_PLAYERS + 8;

/// Entrants of the live round and the lamports they paid in.
///
/// Entries keep insertion order and the same key may appear several times,
/// one slot per paid entry.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq)]
pub struct EntryLedger {
    pub players: Vec<Pubkey>,
    pub pot: u64,
}

impl EntryLedger {
    /// Appends one slot for `player` and adds `amount` to the pot.
    pub fn record(&mut self, player: Pubkey, amount: u64) -> Result<()> {
        require!(self.players.len() < MAX_PLAYERS, RaffleError::RaffleFull);
        let pot = self
            .pot
            .checked_add(amount)
            .ok_or(RaffleError::Overflow)?;

        self.players.push(player);
        self.pot = pot;
        Ok(())
    }

    pub fn player(&self, index: usize) -> Option<&Pubkey> {
        self.players.get(index)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn clear(&mut self) {
        self.players.clear();
        self.pot = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_entries_take_separate_slots() {
        let mut ledger = EntryLedger::default();
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();

        ledger.record(alice, 10).unwrap();
        ledger.record(bob, 15).unwrap();
        ledger.record(alice, 10).unwrap();

        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.pot, 35);
        assert_eq!(ledger.player(0), Some(&alice));
        assert_eq!(ledger.player(1), Some(&bob));
        assert_eq!(ledger.player(2), Some(&alice));
        assert_eq!(ledger.player(3), None);
    }

    #[test]
    fn full_ledger_rejects_entry_without_touching_pot() {
        let mut ledger = EntryLedger::default();
        for _ in 0..MAX_PLAYERS {
            ledger.record(Pubkey::new_unique(), 1).unwrap();
        }

        let err = ledger.record(Pubkey::new_unique(), 1).unwrap_err();
        assert_eq!(err, RaffleError::RaffleFull.into());
        assert_eq!(ledger.len(), MAX_PLAYERS);
        assert_eq!(ledger.pot, MAX_PLAYERS as u64);
    }

    #[test]
    fn pot_overflow_is_rejected() {
        let mut ledger = EntryLedger::default();
        ledger.record(Pubkey::new_unique(), u64::MAX).unwrap();

        let err = ledger.record(Pubkey::new_unique(), 1).unwrap_err();
        assert_eq!(err, RaffleError::Overflow.into());
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn clear_empties_players_and_pot() {
        let mut ledger = EntryLedger::default();
        ledger.record(Pubkey::new_unique(), 10).unwrap();
        ledger.clear();

        assert!(ledger.is_empty());
        assert_eq!(ledger.pot, 0);
    }
}
