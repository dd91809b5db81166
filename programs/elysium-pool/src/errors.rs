use anchor_lang::prelude::*;
use thiserror::Error;

/// Elysium Pools program error codes
/// Codes and messages match the deployed program's IDL
#[error_code]
pub enum ElysiumPoolError {
    // ═══════════════════════════════════════════════════════════════════════
    // GENERAL / TICK ERRORS
    // ═══════════════════════════════════════════════════════════════════════

    #[msg("Enum value could not be converted")]
    InvalidEnum, // 6000

    #[msg("Invalid start tick index provided.")]
    InvalidStartTick, // 6001

    #[msg("Tick-array already exists in this pool")]
    TickArrayExistInPool, // 6002

    #[msg("Attempt to search for a tick-array failed")]
    TickArrayIndexOutofBounds, // 6003

    #[msg("Tick-spacing is not supported")]
    InvalidTickSpacing, // 6004

    #[msg("Position is not empty It cannot be closed")]
    ClosePositionNotEmpty, // 6005

    #[msg("Unable to divide by zero")]
    DivideByZero, // 6006

    #[msg("Unable to cast number into BigInt")]
    NumberCastError, // 6007

    #[msg("Unable to down cast number")]
    NumberDownCastError, // 6008

    #[msg("Tick not found within tick array")]
    TickNotFound, // 6009

    #[msg("Provided tick index is either out of bounds or uninitializable")]
    InvalidTickIndex, // 6010

    #[msg("Provided sqrt price out of bounds")]
    SqrtPriceOutOfBounds, // 6011

    // ═══════════════════════════════════════════════════════════════════════
    // LIQUIDITY ERRORS
    // ═══════════════════════════════════════════════════════════════════════

    #[msg("Liquidity amount must be greater than zero")]
    LiquidityZero, // 6012

    #[msg("Liquidity amount must be less than i64::MAX")]
    LiquidityTooHigh, // 6013

    #[msg("Liquidity overflow")]
    LiquidityOverflow, // 6014

    #[msg("Liquidity underflow")]
    LiquidityUnderflow, // 6015

    #[msg("Tick liquidity net underflowed or overflowed")]
    LiquidityNetError, // 6016

    #[msg("Exceeded token max")]
    TokenMaxExceeded, // 6017

    #[msg("Did not meet token min")]
    TokenMinSubceeded, // 6018

    // ═══════════════════════════════════════════════════════════════════════
    // POSITION / ACCOUNT ERRORS
    // ═══════════════════════════════════════════════════════════════════════

    #[msg("Position token account has a missing or invalid delegate")]
    MissingOrInvalidDelegate, // 6019

    #[msg("Position token amount must be 1")]
    InvalidPositionTokenAmount, // 6020

    #[msg("Timestamp should be convertible from i64 to u64")]
    InvalidTimestampConversion, // 6021

    #[msg("Timestamp should be greater than the last updated timestamp")]
    InvalidTimestamp, // 6022

    #[msg("Invalid tick array sequence provided for instruction.")]
    InvalidTickArraySequence, // 6023

    #[msg("Token Mint in wrong order")]
    InvalidTokenMintOrder, // 6024

    // ═══════════════════════════════════════════════════════════════════════
    // REWARD / FEE ERRORS
    // ═══════════════════════════════════════════════════════════════════════

    #[msg("Reward not initialized")]
    RewardNotInitialized, // 6025

    #[msg("Invalid reward index")]
    InvalidRewardIndex, // 6026

    #[msg("Reward vault requires amount to support emissions for at least one day")]
    RewardVaultAmountInsufficient, // 6027

    #[msg("Exceeded max fee rate")]
    FeeRateMaxExceeded, // 6028

    #[msg("Exceeded max protocol fee rate")]
    ProtocolFeeRateMaxExceeded, // 6029

    // ═══════════════════════════════════════════════════════════════════════
    // MATH ERRORS
    // ═══════════════════════════════════════════════════════════════════════

    #[msg("Multiplication with shift right overflow")]
    MultiplicationShiftRightOverflow, // 6030

    #[msg("Muldiv overflow")]
    MulDivOverflow, // 6031

    #[msg("Invalid div_u256 input")]
    MulDivInvalidInput, // 6032

    #[msg("Multiplication overflow")]
    MultiplicationOverflow, // 6033

    // ═══════════════════════════════════════════════════════════════════════
    // SWAP ERRORS
    // ═══════════════════════════════════════════════════════════════════════

    #[msg("Provided SqrtPriceLimit not in the same direction as the swap.")]
    InvalidSqrtPriceLimitDirection, // 6034

    #[msg("There are no tradable amount to swap.")]
    ZeroTradableAmount, // 6035

    #[msg("Amount out below minimum threshold")]
    AmountOutBelowMinimum, // 6036

    #[msg("Amount in above maximum threshold")]
    AmountInAboveMaximum, // 6037

    #[msg("Invalid index for tick array sequence")]
    TickArraySequenceInvalidIndex, // 6038

    #[msg("Amount calculated overflows")]
    AmountCalcOverflow, // 6039

    #[msg("Amount remaining overflows")]
    AmountRemainingOverflow, // 6040

    #[msg("Invalid intermediary mint")]
    InvalidIntermediaryMint, // 6041

    #[msg("Duplicate two hop pool")]
    DuplicateTwoHopPool, // 6042

    // ═══════════════════════════════════════════════════════════════════════
    // POSITION BUNDLE ERRORS
    // ═══════════════════════════════════════════════════════════════════════

    #[msg("Bundle index is out of bounds")]
    InvalidBundleIndex, // 6043

    #[msg("Position has already been opened")]
    BundledPositionAlreadyOpened, // 6044

    #[msg("Position has already been closed")]
    BundledPositionAlreadyClosed, // 6045

    #[msg("Unable to delete PositionBundle with open positions")]
    PositionBundleNotDeletable, // 6046
}

/// Reasons a swap input is rejected before an instruction is built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapErrorCode {
    SqrtPriceOutOfBounds,
    InvalidSqrtPriceLimitDirection,
    ZeroTradableAmount,
    TickArraySequenceInvalid,
}

impl std::fmt::Display for SwapErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            SwapErrorCode::SqrtPriceOutOfBounds => "sqrt price limit out of bounds",
            SwapErrorCode::InvalidSqrtPriceLimitDirection => {
                "sqrt price limit is not in the direction of the swap"
            }
            SwapErrorCode::ZeroTradableAmount => "swap amount must be greater than zero",
            SwapErrorCode::TickArraySequenceInvalid => "tick array sequence could not be derived",
        };
        f.write_str(msg)
    }
}

/// Client-side errors raised while building instructions and transactions
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid reward index {0}")]
    InvalidRewardIndex(u8),

    #[error("Bundle index {0} is out of bounds")]
    InvalidBundleIndex(u16),

    #[error("Token mints are not in canonical order: {mint_a} >= {mint_b}")]
    InvalidTokenMintOrder { mint_a: Pubkey, mint_b: Pubkey },

    #[error("Pool {0} not found in the supplied accounts")]
    PoolNotFound(Pubkey),

    #[error("Config {0} not found in the supplied accounts")]
    ConfigNotFound(Pubkey),

    #[error("{wallet} is not the collect protocol fees authority of config {config}")]
    UnauthorizedAuthority { wallet: Pubkey, config: Pubkey },

    #[error("Transaction too large: {size} bytes exceeds the {limit} byte limit")]
    TransactionTooLarge { size: usize, limit: usize },

    #[error("Invalid swap input: {0}")]
    InvalidSwapInput(SwapErrorCode),

    #[error("Invalid position range [{tick_lower_index}, {tick_upper_index}) for tick spacing {tick_spacing}")]
    InvalidTickRange {
        tick_lower_index: i32,
        tick_upper_index: i32,
        tick_spacing: u16,
    },

    #[error("Tick {tick_index} not found in tick array starting at {start_tick_index}")]
    TickNotFound { tick_index: i32, start_tick_index: i32 },

    #[error("No tick array holds tick {tick_index} at tick spacing {tick_spacing}")]
    TickArrayOutOfBounds { tick_index: i32, tick_spacing: u16 },

    #[error("Fee rate {fee_rate} exceeds the maximum of {max}")]
    FeeRateMaxExceeded { fee_rate: u16, max: u16 },

    #[error("Protocol fee rate {protocol_fee_rate} exceeds the maximum of {max}")]
    ProtocolFeeRateMaxExceeded { protocol_fee_rate: u16, max: u16 },

    #[error("Anchor error: {0}")]
    Anchor(#[from] anchor_lang::error::Error),
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_match_program() {
        assert_eq!(u32::from(ElysiumPoolError::InvalidEnum), 6000);
        assert_eq!(u32::from(ElysiumPoolError::TickNotFound), 6009);
        assert_eq!(u32::from(ElysiumPoolError::InvalidTokenMintOrder), 6024);
        assert_eq!(u32::from(ElysiumPoolError::InvalidRewardIndex), 6026);
        assert_eq!(u32::from(ElysiumPoolError::DuplicateTwoHopPool), 6042);
        assert_eq!(u32::from(ElysiumPoolError::PositionBundleNotDeletable), 6046);
    }

    #[test]
    fn test_client_error_from_anchor() {
        let err: ClientError = anchor_lang::error::Error::from(ElysiumPoolError::TickNotFound).into();
        assert!(matches!(err, ClientError::Anchor(_)));
    }

    #[test]
    fn test_swap_error_display() {
        let err = ClientError::InvalidSwapInput(SwapErrorCode::ZeroTradableAmount);
        assert_eq!(err.to_string(), "Invalid swap input: swap amount must be greater than zero");

        let err = ClientError::TickArrayOutOfBounds { tick_index: 128, tick_spacing: 0 };
        assert_eq!(err.to_string(), "No tick array holds tick 128 at tick spacing 0");
    }
}
