//! Growth-inside accounting shared by fee and reward quotes
//!
//! Accumulators are Q64.64 values that only ever increase modulo 2^128.
//! Every subtraction here wraps; a tick's "outside" value may legitimately
//! exceed the global value it is compared against.

use crate::math::full_math::{mul_div_floor, mul_shr, Q64_RESOLUTION};

/// Growth accumulated below `tick_lower_index`
pub fn growth_below(
    tick_current_index: i32,
    tick_lower_index: i32,
    growth_global: u128,
    growth_outside_lower: u128,
) -> u128 {
    if tick_current_index < tick_lower_index {
        growth_global.wrapping_sub(growth_outside_lower)
    } else {
        growth_outside_lower
    }
}

/// Growth accumulated at or above `tick_upper_index`
pub fn growth_above(
    tick_current_index: i32,
    tick_upper_index: i32,
    growth_global: u128,
    growth_outside_upper: u128,
) -> u128 {
    if tick_current_index < tick_upper_index {
        growth_outside_upper
    } else {
        growth_global.wrapping_sub(growth_outside_upper)
    }
}

/// global - below - above, each step wrapping
pub fn growth_inside(
    tick_current_index: i32,
    tick_lower_index: i32,
    tick_upper_index: i32,
    growth_global: u128,
    growth_outside_lower: u128,
    growth_outside_upper: u128,
) -> u128 {
    let below = growth_below(tick_current_index, tick_lower_index, growth_global, growth_outside_lower);
    let above = growth_above(tick_current_index, tick_upper_index, growth_global, growth_outside_upper);
    growth_global.wrapping_sub(below).wrapping_sub(above)
}

/// Tokens earned by `liquidity` since `checkpoint`, truncated to u64
// the program stores owed amounts as u64: it keeps the low 64 bits and accumulates with wrapping add
pub fn owed_delta(growth_inside: u128, checkpoint: u128, liquidity: u128) -> u64 {
    mul_shr(growth_inside.wrapping_sub(checkpoint), liquidity, Q64_RESOLUTION).low_u64()
}

/// New owed total after accruing growth since `checkpoint`
pub fn accumulate_owed(owed: u64, growth_inside: u128, checkpoint: u128, liquidity: u128) -> u64 {
    owed.wrapping_add(owed_delta(growth_inside, checkpoint, liquidity))
}

/// Growth added to a reward slot's global accumulator over `elapsed_seconds`.
/// Zero while the pool has no in-range liquidity.
pub fn emissions_growth_delta(elapsed_seconds: u64, emissions_per_second_x64: u128, liquidity: u128) -> u128 {
    mul_div_floor(elapsed_seconds as u128, emissions_per_second_x64, liquidity)
        .map(|delta| delta.low_u128())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::full_math::Q64;
    use proptest::prelude::*;

    #[test]
    fn test_growth_below_wraps() {
        // current < lower takes the subtracting branch: 5 - 10 mod 2^128
        assert_eq!(growth_below(-20, -10, 5, 10), u128::MAX - 4);
    }

    #[test]
    fn test_growth_below_at_lower_boundary() {
        // current == lower is not strictly below, outside is used directly
        assert_eq!(growth_below(-10, -10, 5, 10), 10);
        assert_eq!(growth_below(-9, -10, 5, 10), 10);
    }

    #[test]
    fn test_growth_above_boundary() {
        assert_eq!(growth_above(9, 10, 1000, 200), 200);
        assert_eq!(growth_above(10, 10, 1000, 200), 800);
        assert_eq!(growth_above(10, 10, 100, 200), u128::MAX - 99);
    }

    #[test]
    fn test_growth_inside_wraps_back() {
        // Ticks initialized after large global growth; outside values exceed global
        let inside = growth_inside(0, -10, 10, 50, 80, 90);
        let expected = 50u128.wrapping_sub(80).wrapping_sub(90);
        assert_eq!(inside, expected);
        // accruing 30 more growth inside moves the result by exactly 30
        assert_eq!(growth_inside(0, -10, 10, 80, 80, 90).wrapping_sub(inside), 30);
    }

    #[test]
    fn test_owed_delta() {
        assert_eq!(owed_delta(700, 700, Q64), 0);
        assert_eq!(owed_delta(1700, 700, Q64), 1000);
        assert_eq!(owed_delta(1700, 700, Q64 * 3), 3000);
        // half a token per unit of liquidity
        assert_eq!(owed_delta(Q64 / 2, 0, 5), 2);
        // checkpoint ahead of inside after wraparound
        assert_eq!(owed_delta(5, u128::MAX - 4, Q64), 10);
    }

    #[test]
    fn test_owed_truncates_and_wraps_like_u64_storage() {
        // one token per unit over 2^64 + 7 units keeps only the low 64 bits
        assert_eq!(owed_delta(Q64, 0, Q64 + 7), 7);
        assert_eq!(accumulate_owed(u64::MAX, 3 * Q64, 0, 1), 2);
    }

    #[test]
    fn test_emissions_growth_delta() {
        assert_eq!(emissions_growth_delta(10, Q64, Q64), 10);
        assert_eq!(emissions_growth_delta(10, Q64, 0), 0);
        assert_eq!(emissions_growth_delta(0, Q64, 1), 0);
    }

    proptest! {
        #[test]
        fn prop_inside_is_global_minus_outsides(
            current in -1000i32..1000,
            lower in -500i32..0,
            upper in 1i32..500,
            global: u128,
            outside_lower: u128,
            outside_upper: u128,
        ) {
            let inside = growth_inside(current, lower, upper, global, outside_lower, outside_upper);
            let below = growth_below(current, lower, global, outside_lower);
            let above = growth_above(current, upper, global, outside_upper);
            prop_assert_eq!(inside.wrapping_add(below).wrapping_add(above), global);
        }

        #[test]
        fn prop_zero_delta_at_checkpoint(inside: u128, liquidity: u128, owed: u64) {
            prop_assert_eq!(accumulate_owed(owed, inside, inside, liquidity), owed);
        }
    }
}
