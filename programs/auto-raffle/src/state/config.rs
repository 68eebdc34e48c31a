use anchor_lang::prelude::*;

use crate::error::RaffleError;

/// Random values requested per draw. Only the first one is used.
pub const NUM_WORDS: u32 = 1;
/// Confirmation depth the oracle waits before answering a request.
pub const REQUEST_CONFIRMATIONS: u16 = 3;

pub const DEFAULT_CALLBACK_GAS_LIMIT: u32 = 500_000;

// 8 entrance_fee + 8 interval + 4 num_words + 2 request_confirmations + 32 key_hash
// + 8 subscription_id + 4 callback_gas_limit + 32 oracle
pub const RAFFLE_CONFIG_SIZE: usize = 8 + 8 + 4 + 2 + 32 + 8 + 4 + 32;

/// Parameters fixed when the raffle is created.
///
/// `key_hash`, `subscription_id` and `callback_gas_limit` describe the
/// randomness channel and are only passed through to the oracle.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq)]
pub struct RaffleConfig {
    pub entrance_fee: u64,
    pub interval: i64,
    pub num_words: u32,
    pub request_confirmations: u16,
    pub key_hash: [u8; 32],
    pub subscription_id: u64,
    pub callback_gas_limit: u32,
    pub oracle: Pubkey,
}

/// Caller-supplied part of the configuration for `initialize_raffle`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct InitializeRaffleParams {
    pub entrance_fee: u64,
    pub interval: i64,
    pub key_hash: [u8; 32],
    pub subscription_id: u64,
    pub callback_gas_limit: u32,
    pub oracle: Pubkey,
}

impl RaffleConfig {
    pub fn new(entrance_fee: u64, interval: i64, oracle: Pubkey) -> Self {
        Self {
            entrance_fee,
            interval,
            num_words: NUM_WORDS,
            request_confirmations: REQUEST_CONFIRMATIONS,
            key_hash: [0u8; 32],
            subscription_id: 0,
            callback_gas_limit: DEFAULT_CALLBACK_GAS_LIMIT,
            oracle,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require!(self.entrance_fee > 0, RaffleError::InvalidEntranceFee);
        require!(self.interval > 0, RaffleError::InvalidInterval);
        require!(
            self.callback_gas_limit > 0,
            RaffleError::InvalidCallbackGasLimit
        );
        Ok(())
    }
}

impl From<InitializeRaffleParams> for RaffleConfig {
    fn from(params: InitializeRaffleParams) -> Self {
        Self {
            key_hash: params.key_hash,
            subscription_id: params.subscription_id,
            callback_gas_limit: params.callback_gas_limit,
            ..Self::new(params.entrance_fee, params.interval, params.oracle)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT_ENTRANCE_FEE: u64 = 10_000_000; // 0.01 SOL
    const DEFAULT_INTERVAL: i64 = 30; // seconds

    #[test]
    fn new_config_uses_fixed_channel_parameters() {
        let config =
            RaffleConfig::new(DEFAULT_ENTRANCE_FEE, DEFAULT_INTERVAL, Pubkey::new_unique());
        assert_eq!(config.num_words, 1);
        assert_eq!(config.request_confirmations, 3);
        assert_eq!(config.callback_gas_limit, DEFAULT_CALLBACK_GAS_LIMIT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn params_cannot_override_word_count_or_confirmations() {
        let params = InitializeRaffleParams {
            entrance_fee: 10,
            interval: 60,
            key_hash: [7u8; 32],
            subscription_id: 8830,
            callback_gas_limit: 500_000,
            oracle: Pubkey::new_unique(),
        };
        let config = RaffleConfig::from(params);
        assert_eq!(config.num_words, NUM_WORDS);
        assert_eq!(config.request_confirmations, REQUEST_CONFIRMATIONS);
        assert_eq!(config.key_hash, [7u8; 32]);
        assert_eq!(config.subscription_id, 8830);
        assert_eq!(config.callback_gas_limit, 500_000);
        assert_eq!(config.entrance_fee, 10);
        assert_eq!(config.interval, 60);
    }

    #[test]
    fn rejects_zero_fee_interval_and_gas_limit() {
        let oracle = Pubkey::new_unique();

        let err = RaffleConfig::new(0, 30, oracle).validate().unwrap_err();
        assert_eq!(err, RaffleError::InvalidEntranceFee.into());

        let err = RaffleConfig::new(10, 0, oracle).validate().unwrap_err();
        assert_eq!(err, RaffleError::InvalidInterval.into());

        let mut config = RaffleConfig::new(10, 30, oracle);
        config.callback_gas_limit = 0;
        let err = config.validate().unwrap_err();
        assert_eq!(err, RaffleError::InvalidCallbackGasLimit.into());
    }
}
