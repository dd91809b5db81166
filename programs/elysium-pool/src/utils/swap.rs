//! Swap input helpers
//!
//! Quoting a swap requires the swap-stepping loop and is left to the caller;
//! these helpers turn a quote into validated instruction parameters.

use anchor_lang::prelude::Pubkey;

use crate::constants::{MAX_SQRT_PRICE_X64, MIN_SQRT_PRICE_X64};
use crate::errors::{ClientError, ClientResult, SwapErrorCode};
use crate::instructions::SwapParams;
use crate::state::{ElysiumPool, TokenType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapDirection {
    AtoB,
    BtoA,
}

impl SwapDirection {
    pub fn is_a_to_b(&self) -> bool {
        matches!(self, SwapDirection::AtoB)
    }
}

/// Slippage tolerance as a fraction, e.g. 1/100 for 1%
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Percentage {
    pub numerator: u64,
    pub denominator: u64,
}

impl Percentage {
    pub fn from_fraction(numerator: u64, denominator: u64) -> Self {
        Self { numerator, denominator }
    }
}

/// Amounts and tick arrays for one swap instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapInput {
    pub amount: u64,
    pub other_amount_threshold: u64,
    pub sqrt_price_limit: u128,
    pub amount_specified_is_input: bool,
    pub a_to_b: bool,
    pub tick_array_0: Pubkey,
    pub tick_array_1: Pubkey,
    pub tick_array_2: Pubkey,
}

/// The price bound a swap may run to when the caller sets none
pub fn default_sqrt_price_limit(a_to_b: bool) -> u128 {
    if a_to_b {
        MIN_SQRT_PRICE_X64
    } else {
        MAX_SQRT_PRICE_X64
    }
}

/// Threshold that accepts any fill: no minimum output, or no maximum input
pub fn default_other_amount_threshold(amount_specified_is_input: bool) -> u64 {
    if amount_specified_is_input {
        0
    } else {
        u64::MAX
    }
}

/// Direction of a swap given one side's mint; None if the mint is not in the pool
pub fn swap_direction(
    pool: &ElysiumPool,
    swap_token_mint: &Pubkey,
    swap_token_is_input: bool,
) -> Option<SwapDirection> {
    let token_type = pool.token_type(swap_token_mint)?;
    if (token_type == TokenType::TokenA) == swap_token_is_input {
        Some(SwapDirection::AtoB)
    } else {
        Some(SwapDirection::BtoA)
    }
}

/// Scale `amount` by the slippage tolerance, up for maximum inputs and down for minimum outputs
pub fn adjust_for_slippage(amount: u64, slippage: Percentage, adjust_up: bool) -> u64 {
    let (numerator, denominator) = if adjust_up {
        (slippage.denominator as u128 + slippage.numerator as u128, slippage.denominator as u128)
    } else {
        (slippage.denominator as u128, slippage.denominator as u128 + slippage.numerator as u128)
    };
    if denominator == 0 {
        return amount;
    }
    u64::try_from(amount as u128 * numerator / denominator).unwrap_or(u64::MAX)
}

/// Amount and threshold for a quoted swap under a slippage tolerance.
/// Returns `(amount, other_amount_threshold)`.
pub fn swap_amounts_from_quote(
    amount: u64,
    estimated_amount_in: u64,
    estimated_amount_out: u64,
    slippage: Percentage,
    amount_specified_is_input: bool,
) -> (u64, u64) {
    if amount_specified_is_input {
        (amount, adjust_for_slippage(estimated_amount_out, slippage, false))
    } else {
        (amount, adjust_for_slippage(estimated_amount_in, slippage, true))
    }
}

/// Reject inputs the program would refuse before simulating the swap
pub fn validate_swap_input(pool: &ElysiumPool, input: &SwapInput) -> ClientResult<()> {
    if !(MIN_SQRT_PRICE_X64..=MAX_SQRT_PRICE_X64).contains(&input.sqrt_price_limit) {
        return Err(ClientError::InvalidSwapInput(SwapErrorCode::SqrtPriceOutOfBounds));
    }

    let limit_on_wrong_side = if input.a_to_b {
        input.sqrt_price_limit > pool.sqrt_price
    } else {
        input.sqrt_price_limit < pool.sqrt_price
    };
    if limit_on_wrong_side {
        return Err(ClientError::InvalidSwapInput(SwapErrorCode::InvalidSqrtPriceLimitDirection));
    }

    if input.amount == 0 {
        return Err(ClientError::InvalidSwapInput(SwapErrorCode::ZeroTradableAmount));
    }
    Ok(())
}

/// Resolve owner accounts and the oracle for a swap through `pool_address`.
/// `input_token_account` pays the input side, `output_token_account` receives.
pub fn swap_params_from_input(
    program_id: &Pubkey,
    pool_address: &Pubkey,
    pool: &ElysiumPool,
    input: &SwapInput,
    input_token_account: Pubkey,
    output_token_account: Pubkey,
    token_authority: Pubkey,
) -> ClientResult<SwapParams> {
    validate_swap_input(pool, input)?;

    let (token_owner_account_a, token_owner_account_b) = if input.a_to_b {
        (input_token_account, output_token_account)
    } else {
        (output_token_account, input_token_account)
    };

    Ok(SwapParams {
        pool: *pool_address,
        token_authority,
        token_owner_account_a,
        token_vault_a: pool.token_vault_a,
        token_owner_account_b,
        token_vault_b: pool.token_vault_b,
        tick_array_0: input.tick_array_0,
        tick_array_1: input.tick_array_1,
        tick_array_2: input.tick_array_2,
        oracle: crate::pda::oracle(program_id, pool_address).0,
        amount: input.amount,
        other_amount_threshold: input.other_amount_threshold,
        sqrt_price_limit: input.sqrt_price_limit,
        amount_specified_is_input: input.amount_specified_is_input,
        a_to_b: input.a_to_b,
    })
}

/// Swap input with default limits, tick arrays derived from the pool's current tick
pub fn default_swap_input(
    program_id: &Pubkey,
    pool_address: &Pubkey,
    pool: &ElysiumPool,
    amount: u64,
    amount_specified_is_input: bool,
    a_to_b: bool,
) -> ClientResult<SwapInput> {
    let tick_arrays = crate::pda::swap_tick_array_addresses(
        program_id,
        pool_address,
        pool.tick_current_index,
        pool.tick_spacing,
        a_to_b,
    );
    // the program needs three accounts; repeat the last array when the walk hit a bound
    let last = *tick_arrays
        .last()
        .ok_or(ClientError::InvalidSwapInput(SwapErrorCode::TickArraySequenceInvalid))?;
    let tick_array = |i: usize| tick_arrays.get(i).copied().unwrap_or(last);

    Ok(SwapInput {
        amount,
        other_amount_threshold: default_other_amount_threshold(amount_specified_is_input),
        sqrt_price_limit: default_sqrt_price_limit(a_to_b),
        amount_specified_is_input,
        a_to_b,
        tick_array_0: tick_array(0),
        tick_array_1: tick_array(1),
        tick_array_2: tick_array(2),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::full_math::Q64;

    fn pool() -> ElysiumPool {
        ElysiumPool {
            token_mint_a: Pubkey::new_unique(),
            token_mint_b: Pubkey::new_unique(),
            token_vault_a: Pubkey::new_unique(),
            token_vault_b: Pubkey::new_unique(),
            sqrt_price: Q64,
            tick_spacing: 64,
            ..Default::default()
        }
    }

    fn input(a_to_b: bool) -> SwapInput {
        SwapInput {
            amount: 1_000,
            other_amount_threshold: 0,
            sqrt_price_limit: default_sqrt_price_limit(a_to_b),
            amount_specified_is_input: true,
            a_to_b,
            tick_array_0: Pubkey::new_unique(),
            tick_array_1: Pubkey::new_unique(),
            tick_array_2: Pubkey::new_unique(),
        }
    }

    #[test]
    fn test_defaults() {
        assert_eq!(default_sqrt_price_limit(true), MIN_SQRT_PRICE_X64);
        assert_eq!(default_sqrt_price_limit(false), MAX_SQRT_PRICE_X64);
        assert_eq!(default_other_amount_threshold(true), 0);
        assert_eq!(default_other_amount_threshold(false), u64::MAX);
    }

    #[test]
    fn test_swap_direction() {
        let pool = pool();
        assert_eq!(swap_direction(&pool, &pool.token_mint_a, true), Some(SwapDirection::AtoB));
        assert_eq!(swap_direction(&pool, &pool.token_mint_a, false), Some(SwapDirection::BtoA));
        assert_eq!(swap_direction(&pool, &pool.token_mint_b, true), Some(SwapDirection::BtoA));
        assert_eq!(swap_direction(&pool, &pool.token_mint_b, false), Some(SwapDirection::AtoB));
        assert_eq!(swap_direction(&pool, &Pubkey::new_unique(), true), None);
    }

    #[test]
    fn test_validate_swap_input() {
        let pool = pool();
        assert!(validate_swap_input(&pool, &input(true)).is_ok());
        assert!(validate_swap_input(&pool, &input(false)).is_ok());

        let out_of_bounds = SwapInput {
            sqrt_price_limit: MIN_SQRT_PRICE_X64 - 1,
            ..input(true)
        };
        assert!(matches!(
            validate_swap_input(&pool, &out_of_bounds),
            Err(ClientError::InvalidSwapInput(SwapErrorCode::SqrtPriceOutOfBounds))
        ));

        let wrong_side = SwapInput {
            sqrt_price_limit: Q64 * 2,
            ..input(true)
        };
        assert!(matches!(
            validate_swap_input(&pool, &wrong_side),
            Err(ClientError::InvalidSwapInput(SwapErrorCode::InvalidSqrtPriceLimitDirection))
        ));

        let at_current = SwapInput {
            sqrt_price_limit: Q64,
            ..input(false)
        };
        assert!(validate_swap_input(&pool, &at_current).is_ok());
        let at_current = SwapInput {
            sqrt_price_limit: Q64,
            ..input(true)
        };
        assert!(validate_swap_input(&pool, &at_current).is_ok());

        let zero = SwapInput { amount: 0, ..input(true) };
        assert!(matches!(
            validate_swap_input(&pool, &zero),
            Err(ClientError::InvalidSwapInput(SwapErrorCode::ZeroTradableAmount))
        ));
    }

    #[test]
    fn test_swap_at_price_floor_with_default_limit() {
        let pool = ElysiumPool {
            sqrt_price: MIN_SQRT_PRICE_X64,
            ..pool()
        };
        let floor = SwapInput { amount: 10, ..input(true) };
        assert_eq!(floor.sqrt_price_limit, pool.sqrt_price);
        assert!(validate_swap_input(&pool, &floor).is_ok());

        let params = swap_params_from_input(
            &crate::ID,
            &Pubkey::new_unique(),
            &pool,
            &floor,
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
        )
        .unwrap();
        assert_eq!(params.sqrt_price_limit, MIN_SQRT_PRICE_X64);
        assert_eq!(params.amount, 10);
    }

    #[test]
    fn test_swap_params_route_owner_accounts() {
        let pool = pool();
        let pool_address = Pubkey::new_unique();
        let input_account = Pubkey::new_unique();
        let output_account = Pubkey::new_unique();
        let wallet = Pubkey::new_unique();

        let a_to_b = swap_params_from_input(
            &crate::ID,
            &pool_address,
            &pool,
            &input(true),
            input_account,
            output_account,
            wallet,
        )
        .unwrap();
        assert_eq!(a_to_b.token_owner_account_a, input_account);
        assert_eq!(a_to_b.token_owner_account_b, output_account);
        assert_eq!(a_to_b.oracle, crate::pda::oracle(&crate::ID, &pool_address).0);
        assert_eq!(a_to_b.token_vault_a, pool.token_vault_a);

        let b_to_a = swap_params_from_input(
            &crate::ID,
            &pool_address,
            &pool,
            &input(false),
            input_account,
            output_account,
            wallet,
        )
        .unwrap();
        assert_eq!(b_to_a.token_owner_account_a, output_account);
        assert_eq!(b_to_a.token_owner_account_b, input_account);
    }

    #[test]
    fn test_slippage() {
        let one_percent = Percentage::from_fraction(1, 100);
        assert_eq!(adjust_for_slippage(10_100, one_percent, false), 10_000);
        assert_eq!(adjust_for_slippage(10_000, one_percent, true), 10_100);
        assert_eq!(adjust_for_slippage(u64::MAX, one_percent, true), u64::MAX);

        assert_eq!(swap_amounts_from_quote(500, 500, 10_100, one_percent, true), (500, 10_000));
        assert_eq!(swap_amounts_from_quote(500, 10_000, 500, one_percent, false), (500, 10_100));
    }

    #[test]
    fn test_default_swap_input_near_upper_bound() {
        let pool = ElysiumPool {
            tick_current_index: 443_600,
            tick_spacing: 1,
            ..pool()
        };
        let pool_address = Pubkey::new_unique();
        let input = default_swap_input(&crate::ID, &pool_address, &pool, 10, true, false).unwrap();

        let current = crate::pda::tick_array(&crate::ID, &pool_address, 443_520).0;
        let top = crate::pda::tick_array(&crate::ID, &pool_address, 443_608).0;
        assert_eq!(input.tick_array_0, current);
        assert_eq!(input.tick_array_1, top);
        assert_eq!(input.tick_array_2, top);
        assert_eq!(input.sqrt_price_limit, MAX_SQRT_PRICE_X64);
    }
}
