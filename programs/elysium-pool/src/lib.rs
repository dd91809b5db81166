//! Elysium Pools - client SDK for a concentrated liquidity AMM on Solana
//!
//! The `#[program]` module mirrors the deployed program's interface so Anchor
//! generates `accounts::*` and `instruction::*` types matching its IDL. The
//! handlers are interface stubs; all logic in this crate runs client side.
//!
//! ## Layout
//!
//! - **Interface**: account layouts (`state`), account contexts (`instructions`), error codes
//! - **Builders**: one `*_ix` function per program instruction, plus PDA derivation (`pda`)
//! - **Composites**: collect-all and protocol fee collection packed into sized transactions
//! - **Facades**: `PoolSnapshot` / `PositionSnapshot` over fetched account data
//! - **Quotes**: off-chain replay of the program's fee and reward accounting
//!
//! All growth accumulators are Q64.64 and wrap modulo 2^128, exactly as on chain.

use anchor_lang::prelude::*;

pub mod client;
pub mod composites;
pub mod constants;
pub mod context;
pub mod errors;
pub mod instructions;
pub mod math;
pub mod parsing;
pub mod pda;
pub mod quotes;
pub mod state;
pub mod utils;

use instructions::*;
// shadow the bumps structs derive(Accounts) generates for OpenPosition*
use state::{ElysiumPoolBumps, OpenPositionBumps, OpenPositionWithMetadataBumps};

declare_id!("FJjdmqtjtACsE1SkYVXV9SLrEkjN7nm3YxDimnUyyrwp");

#[program]
#[allow(unused_variables)]
pub mod elysium_pool {
    use super::*;

    // ═══════════════════════════════════════════════════════════════════════════
    // CONFIG INSTRUCTIONS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Create the pools config holding the protocol authorities
    pub fn initialize_config(
        ctx: Context<InitializeConfig>,
        fee_authority: Pubkey,
        collect_protocol_fees_authority: Pubkey,
        reward_emissions_super_authority: Pubkey,
        default_protocol_fee_rate: u16,
    ) -> Result<()> {
        Ok(())
    }

    /// Create a fee tier for a tick spacing
    ///
    /// # Arguments
    /// * `default_fee_rate` - Fee rate in hundredths of a basis point, at most MAX_FEE_RATE
    pub fn initialize_fee_tier(
        ctx: Context<InitializeFeeTier>,
        tick_spacing: u16,
        default_fee_rate: u16,
    ) -> Result<()> {
        Ok(())
    }

    pub fn set_default_fee_rate(ctx: Context<SetDefaultFeeRate>, default_fee_rate: u16) -> Result<()> {
        Ok(())
    }

    pub fn set_default_protocol_fee_rate(
        ctx: Context<SetDefaultProtocolFeeRate>,
        default_protocol_fee_rate: u16,
    ) -> Result<()> {
        Ok(())
    }

    pub fn set_fee_authority(ctx: Context<SetFeeAuthority>) -> Result<()> {
        Ok(())
    }

    pub fn set_collect_protocol_fees_authority(ctx: Context<SetCollectProtocolFeesAuthority>) -> Result<()> {
        Ok(())
    }

    pub fn set_reward_emissions_super_authority(ctx: Context<SetRewardEmissionsSuperAuthority>) -> Result<()> {
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // POOL INSTRUCTIONS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Create a pool for an ordered mint pair
    ///
    /// # Arguments
    /// * `initial_sqrt_price` - Initial sqrt(price) in Q64.64 format
    pub fn initialize_pool(
        ctx: Context<InitializePool>,
        bumps: ElysiumPoolBumps,
        tick_spacing: u16,
        initial_sqrt_price: u128,
    ) -> Result<()> {
        Ok(())
    }

    /// Create the tick array starting at `start_tick_index`
    pub fn initialize_tick_array(ctx: Context<InitializeTickArray>, start_tick_index: i32) -> Result<()> {
        Ok(())
    }

    pub fn set_fee_rate(ctx: Context<SetFeeRate>, fee_rate: u16) -> Result<()> {
        Ok(())
    }

    pub fn set_protocol_fee_rate(ctx: Context<SetProtocolFeeRate>, protocol_fee_rate: u16) -> Result<()> {
        Ok(())
    }

    /// Transfer the pool's accrued protocol fees to the collect authority
    pub fn collect_protocol_fees(ctx: Context<CollectProtocolFees>) -> Result<()> {
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // REWARD INSTRUCTIONS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Assign a mint and vault to reward slot `reward_index`
    pub fn initialize_reward(ctx: Context<InitializeReward>, reward_index: u8) -> Result<()> {
        Ok(())
    }

    /// # Arguments
    /// * `emissions_per_second_x64` - Reward tokens per second, Q64.64
    pub fn set_reward_emissions(
        ctx: Context<SetRewardEmissions>,
        reward_index: u8,
        emissions_per_second_x64: u128,
    ) -> Result<()> {
        Ok(())
    }

    pub fn set_reward_authority(ctx: Context<SetRewardAuthority>, reward_index: u8) -> Result<()> {
        Ok(())
    }

    pub fn set_reward_authority_by_super_authority(
        ctx: Context<SetRewardAuthorityBySuperAuthority>,
        reward_index: u8,
    ) -> Result<()> {
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // POSITION INSTRUCTIONS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Open a position over `[tick_lower_index, tick_upper_index)`
    pub fn open_position(
        ctx: Context<OpenPosition>,
        bumps: OpenPositionBumps,
        tick_lower_index: i32,
        tick_upper_index: i32,
    ) -> Result<()> {
        Ok(())
    }

    pub fn open_position_with_metadata(
        ctx: Context<OpenPositionWithMetadata>,
        bumps: OpenPositionWithMetadataBumps,
        tick_lower_index: i32,
        tick_upper_index: i32,
    ) -> Result<()> {
        Ok(())
    }

    /// Add liquidity to a position
    ///
    /// # Arguments
    /// * `liquidity_amount` - Amount of liquidity to add
    /// * `token_max_a` - Maximum amount of token A to deposit
    /// * `token_max_b` - Maximum amount of token B to deposit
    pub fn increase_liquidity(
        ctx: Context<ModifyLiquidity>,
        liquidity_amount: u128,
        token_max_a: u64,
        token_max_b: u64,
    ) -> Result<()> {
        Ok(())
    }

    /// Remove liquidity from a position
    ///
    /// # Arguments
    /// * `liquidity_amount` - Amount of liquidity to remove
    /// * `token_min_a` - Minimum amount of token A to receive
    /// * `token_min_b` - Minimum amount of token B to receive
    pub fn decrease_liquidity(
        ctx: Context<ModifyLiquidity>,
        liquidity_amount: u128,
        token_min_a: u64,
        token_min_b: u64,
    ) -> Result<()> {
        Ok(())
    }

    /// Checkpoint fees and rewards owed to a position
    pub fn update_fees_and_rewards(ctx: Context<UpdateFeesAndRewards>) -> Result<()> {
        Ok(())
    }

    pub fn collect_fees(ctx: Context<CollectFees>) -> Result<()> {
        Ok(())
    }

    pub fn collect_reward(ctx: Context<CollectReward>, reward_index: u8) -> Result<()> {
        Ok(())
    }

    /// Close an empty position and burn its NFT
    pub fn close_position(ctx: Context<ClosePosition>) -> Result<()> {
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // SWAP INSTRUCTIONS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Swap against a single pool
    ///
    /// # Arguments
    /// * `amount` - Exact input if `amount_specified_is_input`, exact output otherwise
    /// * `other_amount_threshold` - Minimum output or maximum input
    /// * `sqrt_price_limit` - Price the swap may not cross, Q64.64
    pub fn swap(
        ctx: Context<Swap>,
        amount: u64,
        other_amount_threshold: u64,
        sqrt_price_limit: u128,
        amount_specified_is_input: bool,
        a_to_b: bool,
    ) -> Result<()> {
        Ok(())
    }

    /// Swap through two pools sharing an intermediary mint
    pub fn two_hop_swap(
        ctx: Context<TwoHopSwap>,
        amount: u64,
        other_amount_threshold: u64,
        amount_specified_is_input: bool,
        a_to_b_one: bool,
        a_to_b_two: bool,
        sqrt_price_limit_one: u128,
        sqrt_price_limit_two: u128,
    ) -> Result<()> {
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // POSITION BUNDLE INSTRUCTIONS
    // ═══════════════════════════════════════════════════════════════════════════

    pub fn initialize_position_bundle(ctx: Context<InitializePositionBundle>) -> Result<()> {
        Ok(())
    }

    pub fn initialize_position_bundle_with_metadata(
        ctx: Context<InitializePositionBundleWithMetadata>,
    ) -> Result<()> {
        Ok(())
    }

    pub fn delete_position_bundle(ctx: Context<DeletePositionBundle>) -> Result<()> {
        Ok(())
    }

    /// Open the position at `bundle_index` of a bundle
    pub fn open_bundled_position(
        ctx: Context<OpenBundledPosition>,
        bundle_index: u16,
        tick_lower_index: i32,
        tick_upper_index: i32,
    ) -> Result<()> {
        Ok(())
    }

    pub fn close_bundled_position(ctx: Context<CloseBundledPosition>, bundle_index: u16) -> Result<()> {
        Ok(())
    }
}
