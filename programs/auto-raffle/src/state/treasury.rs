use anchor_lang::prelude::*;

pub const TREASURY_SEED: &[u8] = b"treasury";

// 8 discriminator, 32 pubkey, 1 bump
pub const TREASURY_ACCOUNT_SIZE: usize = 8 + 32 + 1;

/// Program-owned account holding the pot of the live round.
#[account]
pub struct Treasury {
    pub raffle: Pubkey,
    pub bump: u8,
}

impl Treasury {
    /// Lamports that may leave the treasury without dropping below `rent_exempt_minimum`.
    pub fn withdrawable(balance: u64, rent_exempt_minimum: u64) -> u64 {
        balance.saturating_sub(rent_exempt_minimum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rent_reserve_is_never_withdrawable() {
        assert_eq!(Treasury::withdrawable(1_000_030, 1_000_000), 30);
        assert_eq!(Treasury::withdrawable(1_000_000, 1_000_000), 0);
        assert_eq!(Treasury::withdrawable(10, 1_000_000), 0);
    }
}
