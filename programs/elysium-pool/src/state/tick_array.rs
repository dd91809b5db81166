use anchor_lang::prelude::*;

use crate::constants::{TICK_ARRAY_SIZE, TICK_ARRAY_SIZE_USIZE};
use crate::errors::ElysiumPoolError;
use crate::state::tick::Tick;
use crate::utils::tick::tick_array_start_index;

/// Tick Array - stores a contiguous range of 88 ticks
/// PDA: ["tick_array", pool, start_tick_index.to_string()]
#[account]
#[derive(Debug, PartialEq)]
pub struct TickArray {
    /// First tick index covered, a multiple of TICK_ARRAY_SIZE * tick_spacing
    pub start_tick_index: i32,

    pub ticks: [Tick; TICK_ARRAY_SIZE_USIZE],

    /// The pool this tick array belongs to
    pub pool: Pubkey,
}

impl Default for TickArray {
    fn default() -> Self {
        Self {
            start_tick_index: 0,
            ticks: [Tick::default(); TICK_ARRAY_SIZE_USIZE],
            pool: Pubkey::default(),
        }
    }
}

impl TickArray {
    pub const LEN: usize = 8 + 4 + Tick::LEN * TICK_ARRAY_SIZE_USIZE + 32;

    /// Start index of the array containing `tick_index`, rounding toward negative infinity.
    /// None for a zero tick spacing or a tick outside every array.
    pub fn get_start_tick_index(tick_index: i32, tick_spacing: u16) -> Option<i32> {
        tick_array_start_index(tick_index, tick_spacing, 0)
    }

    /// Get the tick at a specific index
    pub fn get_tick(&self, tick_index: i32, tick_spacing: u16) -> Result<&Tick> {
        let offset = self.tick_offset(tick_index, tick_spacing)?;
        Ok(&self.ticks[offset])
    }

    /// Offset of `tick_index` within this array
    fn tick_offset(&self, tick_index: i32, tick_spacing: u16) -> Result<usize> {
        if tick_spacing == 0
            || tick_index % tick_spacing as i32 != 0
            || !self.is_tick_in_array(tick_index, tick_spacing)
        {
            return Err(ElysiumPoolError::TickNotFound.into());
        }
        Ok(((tick_index - self.start_tick_index) / tick_spacing as i32) as usize)
    }

    /// Check if a tick index falls within this array
    pub fn is_tick_in_array(&self, tick_index: i32, tick_spacing: u16) -> bool {
        let ticks_per_array = TICK_ARRAY_SIZE * tick_spacing as i32;
        tick_index >= self.start_tick_index && tick_index < self.start_tick_index + ticks_per_array
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_array_len_matches_serialized_size() {
        let mut data = Vec::new();
        TickArray::default().try_serialize(&mut data).unwrap();
        assert_eq!(data.len(), TickArray::LEN);
        assert_eq!(TickArray::LEN, 9988);
    }

    #[test]
    fn test_start_tick_index() {
        assert_eq!(TickArray::get_start_tick_index(0, 64), Some(0));
        assert_eq!(TickArray::get_start_tick_index(5631, 64), Some(0));
        assert_eq!(TickArray::get_start_tick_index(5632, 64), Some(5632));
        assert_eq!(TickArray::get_start_tick_index(-1, 64), Some(-5632));
        assert_eq!(TickArray::get_start_tick_index(-5632, 64), Some(-5632));
        assert_eq!(TickArray::get_start_tick_index(-5633, 64), Some(-11264));
        assert_eq!(TickArray::get_start_tick_index(-1, 1), Some(-88));
    }

    #[test]
    fn test_start_tick_index_without_array() {
        assert_eq!(TickArray::get_start_tick_index(128, 0), None);
        assert_eq!(TickArray::get_start_tick_index(0, 0), None);
        assert_eq!(TickArray::get_start_tick_index(i32::MAX, 1), None);
    }

    #[test]
    fn test_get_tick() {
        let mut array = TickArray {
            start_tick_index: -704,
            ..Default::default()
        };
        array.ticks[3].liquidity_gross = 42;

        let tick = array.get_tick(-704 + 3 * 8, 8).unwrap();
        assert_eq!(tick.liquidity_gross, 42);

        // last tick in the array
        assert!(array.get_tick(-8, 8).is_ok());
    }

    #[test]
    fn test_get_tick_not_found() {
        let array = TickArray {
            start_tick_index: 0,
            ..Default::default()
        };

        // past the end
        assert!(array.get_tick(88 * 8, 8).is_err());
        // before the start
        assert!(array.get_tick(-8, 8).is_err());
        // not aligned to spacing
        assert!(array.get_tick(3, 8).is_err());
    }
}
