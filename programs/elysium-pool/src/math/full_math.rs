//! Full precision math operations
//!
//! Products of two Q64.64 / u128 quantities are carried in a 256-bit
//! integer so nothing overflows before the result is descaled.

#[allow(clippy::assign_op_pattern, clippy::ptr_offset_with_cast, clippy::manual_range_contains)]
mod u256 {
    uint::construct_uint! {
        pub struct U256(4);
    }
}

pub use u256::U256;

/// Q64 constant (2^64)
pub const Q64: u128 = 1u128 << 64;

/// Q64.64 resolution in bits
pub const Q64_RESOLUTION: u32 = 64;

/// Calculate (a * b) >> shift with full precision
///
/// The product of two u128 values always fits in 256 bits, so this never overflows.
pub fn mul_shr(a: u128, b: u128, shift: u32) -> U256 {
    (U256::from(a) * U256::from(b)) >> shift as usize
}

/// Calculate (a * b) / denominator rounding down, or None when the denominator is zero
pub fn mul_div_floor(a: u128, b: u128, denominator: u128) -> Option<U256> {
    if denominator == 0 {
        return None;
    }
    Some(U256::from(a) * U256::from(b) / U256::from(denominator))
}
