//! Utility functions for Elysium Pools clients

pub mod swap;
pub mod tick;

use std::collections::HashMap;

use anchor_lang::prelude::Pubkey;

use crate::math::full_math::Q64;

/// Validate token ordering (token A must be < token B in byte order)
pub fn validate_token_order(token_mint_a: &Pubkey, token_mint_b: &Pubkey) -> bool {
    token_mint_a.to_bytes() < token_mint_b.to_bytes()
}

/// Order two mints the way the program expects them in a pool
pub fn order_mints(mint_x: Pubkey, mint_y: Pubkey) -> (Pubkey, Pubkey) {
    if validate_token_order(&mint_x, &mint_y) {
        (mint_x, mint_y)
    } else {
        (mint_y, mint_x)
    }
}

/// Calculate the price of token A in token B from a Q64.64 sqrt price
/// price = (sqrt_price / 2^64)^2 * 10^(decimals_a - decimals_b)
pub fn sqrt_price_to_price(sqrt_price_x64: u128, decimals_a: u8, decimals_b: u8) -> f64 {
    let sqrt_price = sqrt_price_x64 as f64 / Q64 as f64;
    sqrt_price * sqrt_price * 10f64.powi(decimals_a as i32 - decimals_b as i32)
}

/// Calculate a Q64.64 sqrt price from a decimal-adjusted price
pub fn price_to_sqrt_price(price: f64, decimals_a: u8, decimals_b: u8) -> u128 {
    let raw = price * 10f64.powi(decimals_b as i32 - decimals_a as i32);
    (raw.sqrt() * Q64 as f64) as u128
}

/// Token account receiving `mint` for `owner`: an explicit override, else the owner's ATA
pub fn token_account_for(owner: &Pubkey, mint: &Pubkey, overrides: &HashMap<Pubkey, Pubkey>) -> Pubkey {
    overrides
        .get(mint)
        .copied()
        .unwrap_or_else(|| crate::pda::associated_token_address(owner, mint))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_token_order() {
        let low = Pubkey::new_from_array([1; 32]);
        let high = Pubkey::new_from_array([2; 32]);
        assert!(validate_token_order(&low, &high));
        assert!(!validate_token_order(&high, &low));
        assert!(!validate_token_order(&low, &low));
        assert_eq!(order_mints(high, low), (low, high));
    }

    #[test]
    fn test_price_conversions() {
        // sqrt price 1.0 is a price of 1.0 with equal decimals
        assert_eq!(sqrt_price_to_price(Q64, 6, 6), 1.0);
        // 9 vs 6 decimals shifts by 10^3
        assert!((sqrt_price_to_price(Q64 * 2, 9, 6) - 4000.0).abs() < 1e-6);

        let sqrt_price = price_to_sqrt_price(4000.0, 9, 6);
        assert!(sqrt_price.abs_diff(Q64 * 2) < 1 << 20);
    }

    #[test]
    fn test_token_account_for() {
        let owner = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let other_mint = Pubkey::new_unique();
        let custom = Pubkey::new_unique();
        let overrides = HashMap::from([(mint, custom)]);

        assert_eq!(token_account_for(&owner, &mint, &overrides), custom);
        assert_eq!(
            token_account_for(&owner, &other_mint, &overrides),
            crate::pda::associated_token_address(&owner, &other_mint)
        );
    }
}
