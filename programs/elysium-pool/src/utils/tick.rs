use crate::constants::{MAX_TICK_INDEX, MIN_TICK_INDEX, TICK_ARRAY_SIZE};

pub fn check_tick_in_bounds(tick_index: i32) -> bool {
    (MIN_TICK_INDEX..=MAX_TICK_INDEX).contains(&tick_index)
}

pub fn is_tick_initializable(tick_index: i32, tick_spacing: u16) -> bool {
    tick_spacing != 0 && tick_index % tick_spacing as i32 == 0
}

/// A tick a position may use as a boundary
pub fn is_valid_position_tick(tick_index: i32, tick_spacing: u16) -> bool {
    check_tick_in_bounds(tick_index) && is_tick_initializable(tick_index, tick_spacing)
}

/// Start index of the tick array `offset` arrays away from the one holding `tick_index`.
/// None when that array would lie outside the tick bounds.
pub fn tick_array_start_index(tick_index: i32, tick_spacing: u16, offset: i32) -> Option<i32> {
    if tick_spacing == 0 {
        return None;
    }
    let ticks_in_array = TICK_ARRAY_SIZE * tick_spacing as i32;
    let start = (tick_index.div_euclid(ticks_in_array) + offset).checked_mul(ticks_in_array)?;

    let min_start = MIN_TICK_INDEX - ((MIN_TICK_INDEX % ticks_in_array) + ticks_in_array);
    if start < min_start || start > MAX_TICK_INDEX {
        return None;
    }
    Some(start)
}
