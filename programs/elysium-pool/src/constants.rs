// Elysium Pools protocol constants
// Values mirror the deployed program; changing them breaks account layouts and PDAs

use anchor_lang::prelude::*;

/// Number of ticks stored in a single tick array account
pub const TICK_ARRAY_SIZE: i32 = 88;

/// Same as TICK_ARRAY_SIZE, for array lengths and indexing
pub const TICK_ARRAY_SIZE_USIZE: usize = 88;

/// Minimum tick index (p(i) = 1.0001^i)
pub const MIN_TICK_INDEX: i32 = -443636;

/// Maximum tick index
pub const MAX_TICK_INDEX: i32 = 443636;

/// Minimum sqrt price (Q64.64 format)
pub const MIN_SQRT_PRICE_X64: u128 = 4295048016;

/// Maximum sqrt price (Q64.64 format)
pub const MAX_SQRT_PRICE_X64: u128 = 79226673515401279992447579055;

/// Number of reward slots per pool
pub const NUM_REWARDS: usize = 3;

/// Tick arrays a single swap may traverse
pub const MAX_SWAP_TICK_ARRAYS: usize = 3;

/// Number of positions addressable by one position bundle
pub const POSITION_BUNDLE_SIZE: u16 = 256;

/// Fee rates are expressed in hundredths of a basis point (1_000_000 = 100%)
pub const FEE_RATE_DENOMINATOR: u32 = 1_000_000;

/// Maximum pool fee rate (3%)
pub const MAX_FEE_RATE: u16 = 30_000;

/// Maximum protocol fee rate, in basis points of the pool fee (2_500 = 25%)
pub const MAX_PROTOCOL_FEE_RATE: u16 = 2_500;

/// Maximum serialized transaction size accepted by the cluster
pub const PACKET_DATA_SIZE: usize = 1232;

/// Size of an ed25519 signature in a serialized transaction
pub const SIGNATURE_SIZE: usize = 64;

/// Token metadata program used for position NFTs
pub const METADATA_PROGRAM_ID: Pubkey =
    anchor_lang::solana_program::pubkey!("metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s");

/// Account seeds for PDA derivation
pub mod seeds {
    pub const FEE_TIER_SEED: &[u8] = b"fee_tier";
    pub const POOL_SEED: &[u8] = b"pool";
    pub const POSITION_SEED: &[u8] = b"position";
    pub const TICK_ARRAY_SEED: &[u8] = b"tick_array";
    pub const ORACLE_SEED: &[u8] = b"oracle";
    pub const POSITION_BUNDLE_SEED: &[u8] = b"position_bundle";
    pub const BUNDLED_POSITION_SEED: &[u8] = b"bundled_position";
    pub const METADATA_SEED: &[u8] = b"metadata";
}
