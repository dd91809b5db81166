use anchor_lang::prelude::*;

use crate::constants::NUM_REWARDS;
use crate::math::growth::growth_inside;

/// Tick data - stored within tick arrays
/// Each tick is a price point where in-range liquidity can change
#[derive(Copy, Clone, AnchorSerialize, AnchorDeserialize, Default, Debug, PartialEq)]
pub struct Tick {
    /// Whether any position references this tick
    pub initialized: bool,                        // 1

    /// Net liquidity change when crossing this tick left to right
    pub liquidity_net: i128,                      // 16

    /// Total liquidity referencing this tick
    pub liquidity_gross: u128,                    // 16

    /// Fee growth on the other side of this tick (token A)
    /// Relative to the current tick, flipped on every cross
    pub fee_growth_outside_a: u128,               // 16

    /// Fee growth on the other side of this tick (token B)
    pub fee_growth_outside_b: u128,               // 16

    /// Reward growth on the other side of this tick, per reward slot
    pub reward_growths_outside: [u128; NUM_REWARDS], // 48
}

impl Tick {
    /// Size in bytes
    pub const LEN: usize = 113;

    /// Fee growth inside [tick_lower_index, tick_upper_index) for both tokens
    pub fn fee_growths_inside(
        tick_lower: &Tick,
        tick_upper: &Tick,
        tick_lower_index: i32,
        tick_upper_index: i32,
        tick_current_index: i32,
        fee_growth_global_a: u128,
        fee_growth_global_b: u128,
    ) -> (u128, u128) {
        (
            growth_inside(
                tick_current_index,
                tick_lower_index,
                tick_upper_index,
                fee_growth_global_a,
                tick_lower.fee_growth_outside_a,
                tick_upper.fee_growth_outside_a,
            ),
            growth_inside(
                tick_current_index,
                tick_lower_index,
                tick_upper_index,
                fee_growth_global_b,
                tick_lower.fee_growth_outside_b,
                tick_upper.fee_growth_outside_b,
            ),
        )
    }

    /// Reward growth inside the range for a single reward slot
    pub fn reward_growth_inside(
        tick_lower: &Tick,
        tick_upper: &Tick,
        tick_lower_index: i32,
        tick_upper_index: i32,
        tick_current_index: i32,
        reward_index: usize,
        growth_global: u128,
    ) -> u128 {
        growth_inside(
            tick_current_index,
            tick_lower_index,
            tick_upper_index,
            growth_global,
            tick_lower.reward_growths_outside[reward_index],
            tick_upper.reward_growths_outside[reward_index],
        )
    }
}
