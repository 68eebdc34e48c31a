use anchor_lang::error_code;

#[error_code]
pub enum RaffleError {
    Overflow,
    #[msg("Amount paid is below the entrance fee")]
    NotEnoughPaid,
    #[msg("Raffle is not accepting entries")]
    NotOpen,
    #[msg("Raffle is full for this round")]
    RaffleFull,
    #[msg("Upkeep is not needed")]
    UpkeepNotNeeded,
    #[msg("Randomness request is unknown or already resolved")]
    UnknownRequest,
    #[msg("Number of random words does not match the request")]
    RandomWordsMismatch,
    #[msg("Prize transfer to the winner failed")]
    TransferFailed,
    #[msg("Only the configured oracle may deliver randomness")]
    OnlyOracleCanFulfill,
    #[msg("Player index is out of bounds")]
    PlayerIndexOutOfBounds,
    #[msg("Entrance fee must be greater than zero")]
    InvalidEntranceFee,
    #[msg("Interval must be greater than zero")]
    InvalidInterval,
    #[msg("Callback gas limit must be greater than zero")]
    InvalidCallbackGasLimit,
    #[msg("Winner account does not match the drawn winner")]
    WinnerAccountMismatch,
    #[msg("Treasury account does not belong to this raffle")]
    InvalidTreasury,
    #[msg("Round has no players to draw from")]
    NoPlayers,
}
