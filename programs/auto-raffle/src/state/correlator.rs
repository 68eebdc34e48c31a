use anchor_lang::prelude::*;

use crate::{error::RaffleError, state::RaffleConfig};

/// A single random value as delivered by the oracle, big-endian.
pub type RandomWord = [u8; 32];

// 8 (request_id) + 8 (round) + 4 (num_words)
pub const PENDING_REQUEST_SIZE: usize = 8 + 8 + 4;
// 8 (next_request_id) + 1 (option tag) + PENDING_REQUEST_SIZE
pub const CORRELATOR_SIZE: usize = 8 + 1 + PENDING_REQUEST_SIZE;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq)]
pub struct PendingRequest {
    pub request_id: u64,
    pub round: u64,
    pub num_words: u32,
}

/// Result of a successful resolution: the round the request was issued for
/// and the words the oracle delivered for it.
#[derive(Debug, PartialEq)]
pub struct ResolvedRequest {
    pub round: u64,
    pub random_words: Vec<RandomWord>,
}

/// External randomness provider. Implementations hand the request off and
/// return immediately; the answer arrives later through `fulfill_random_words`.
pub trait RandomnessOracle {
    fn request_random_words(&mut self, request_id: u64, config: &RaffleConfig) -> Result<()>;
}

/// Tracks the one randomness request that may be in flight.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq)]
pub struct RandomnessCorrelator {
    pub next_request_id: u64,
    pub pending: Option<PendingRequest>,
}

impl Default for RandomnessCorrelator {
    fn default() -> Self {
        Self {
            next_request_id: 1,
            pending: None,
        }
    }
}

impl RandomnessCorrelator {
    /// Issues a fresh request id for `round` and forwards the request to the oracle.
    pub fn issue<O: RandomnessOracle>(
        &mut self,
        round: u64,
        config: &RaffleConfig,
        oracle: &mut O,
    ) -> Result<u64> {
        // the round state machine never issues while a request is pending
        require!(self.pending.is_none(), RaffleError::UpkeepNotNeeded);

        let request_id = self.next_request_id;
        self.next_request_id = request_id
            .checked_add(1)
            .ok_or(RaffleError::Overflow)?;

        oracle.request_random_words(request_id, config)?;

        self.pending = Some(PendingRequest {
            request_id,
            round,
            num_words: config.num_words,
        });
        Ok(request_id)
    }

    /// One-shot lookup of `request_id`. A resolved id is forgotten, so a second
    /// delivery for it fails with `UnknownRequest`.
    pub fn resolve(
        &mut self,
        request_id: u64,
        random_words: Vec<RandomWord>,
    ) -> Result<ResolvedRequest> {
        let pending = match self.pending {
            Some(pending) if pending.request_id == request_id => pending,
            _ => return err!(RaffleError::UnknownRequest),
        };
        require!(
            random_words.len() == pending.num_words as usize,
            RaffleError::RandomWordsMismatch
        );

        self.pending = None;
        Ok(ResolvedRequest {
            round: pending.round,
            random_words,
        })
    }

    pub fn pending_request_id(&self) -> Option<u64> {
        self.pending.map(|pending| pending.request_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingOracle {
        requests: Vec<u64>,
        fail: bool,
    }

    impl RandomnessOracle for RecordingOracle {
        fn request_random_words(&mut self, request_id: u64, _config: &RaffleConfig) -> Result<()> {
            if self.fail {
                return err!(RaffleError::TransferFailed);
            }
            self.requests.push(request_id);
            Ok(())
        }
    }

    fn config() -> RaffleConfig {
        RaffleConfig::new(10, 30, Pubkey::new_unique())
    }

    #[test]
    fn issue_hands_fresh_ids_to_the_oracle() {
        let config = config();
        let mut oracle = RecordingOracle::default();
        let mut correlator = RandomnessCorrelator::default();

        let first = correlator.issue(0, &config, &mut oracle).unwrap();
        correlator.resolve(first, vec![[0u8; 32]]).unwrap();
        let second = correlator.issue(1, &config, &mut oracle).unwrap();

        assert_ne!(first, second);
        assert_eq!(oracle.requests, vec![first, second]);
        assert_eq!(correlator.pending_request_id(), Some(second));
    }

    #[test]
    fn resolve_returns_round_and_words_once() {
        let config = config();
        let mut oracle = RecordingOracle::default();
        let mut correlator = RandomnessCorrelator::default();
        let request_id = correlator.issue(4, &config, &mut oracle).unwrap();

        let resolved = correlator.resolve(request_id, vec![[9u8; 32]]).unwrap();
        assert_eq!(resolved.round, 4);
        assert_eq!(resolved.random_words, vec![[9u8; 32]]);
        assert_eq!(correlator.pending_request_id(), None);

        let err = correlator.resolve(request_id, vec![[9u8; 32]]).unwrap_err();
        assert_eq!(err, RaffleError::UnknownRequest.into());
    }

    #[test]
    fn resolve_rejects_ids_never_issued() {
        let config = config();
        let mut oracle = RecordingOracle::default();
        let mut correlator = RandomnessCorrelator::default();

        let err = correlator.resolve(1, vec![[0u8; 32]]).unwrap_err();
        assert_eq!(err, RaffleError::UnknownRequest.into());

        let request_id = correlator.issue(0, &config, &mut oracle).unwrap();
        let err = correlator
            .resolve(request_id + 1, vec![[0u8; 32]])
            .unwrap_err();
        assert_eq!(err, RaffleError::UnknownRequest.into());
        assert_eq!(correlator.pending_request_id(), Some(request_id));
    }

    #[test]
    fn wrong_word_count_keeps_request_pending() {
        let config = config();
        let mut oracle = RecordingOracle::default();
        let mut correlator = RandomnessCorrelator::default();
        let request_id = correlator.issue(0, &config, &mut oracle).unwrap();

        let err = correlator.resolve(request_id, vec![]).unwrap_err();
        assert_eq!(err, RaffleError::RandomWordsMismatch.into());
        assert_eq!(correlator.pending_request_id(), Some(request_id));
    }

    #[test]
    fn failed_oracle_request_registers_nothing() {
        let config = config();
        let mut oracle = RecordingOracle {
            fail: true,
            ..Default::default()
        };
        let mut correlator = RandomnessCorrelator::default();

        assert!(correlator.issue(0, &config, &mut oracle).is_err());
        assert_eq!(correlator.pending_request_id(), None);
    }
}
