use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::{InstructionData, ToAccountMetas};
use anchor_spl::token::{Mint, Token};

use crate::errors::{ClientError, ClientResult};
use crate::state::{ElysiumPoolBumps, ElysiumPoolsConfig, FeeTier};
use crate::utils::{order_mints, price_to_sqrt_price, validate_token_order};

/// Create a pool for an ordered mint pair at a tick spacing
#[derive(Accounts)]
pub struct InitializePool<'info> {
    pub pools_config: Box<Account<'info, ElysiumPoolsConfig>>,

    pub token_mint_a: Box<Account<'info, Mint>>,
    pub token_mint_b: Box<Account<'info, Mint>>,

    #[account(mut)]
    pub funder: Signer<'info>,

    /// CHECK: pool PDA, created by the program
    #[account(mut)]
    pub pool: UncheckedAccount<'info>,

    /// New token A vault keypair
    #[account(mut)]
    pub token_vault_a: Signer<'info>,

    /// New token B vault keypair
    #[account(mut)]
    pub token_vault_b: Signer<'info>,

    pub fee_tier: Box<Account<'info, FeeTier>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitializePoolParams {
    pub pools_config: Pubkey,
    pub token_mint_a: Pubkey,
    pub token_mint_b: Pubkey,
    pub funder: Pubkey,
    pub token_vault_a: Pubkey,
    pub token_vault_b: Pubkey,
    pub tick_spacing: u16,
    pub initial_sqrt_price: u128,
}

/// One side of a pool being created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolToken {
    pub mint: Pubkey,
    pub decimals: u8,
    /// New vault keypair address
    pub vault: Pubkey,
}

impl InitializePoolParams {
    /// Params for a pool over two tokens given in any order, opening at `price` of `token_x` in `token_y`.
    /// The tokens are sorted into canonical mint order and the price inverted when they swap.
    pub fn from_price(
        pools_config: Pubkey,
        funder: Pubkey,
        token_x: PoolToken,
        token_y: PoolToken,
        tick_spacing: u16,
        price: f64,
    ) -> Self {
        let (mint_a, _) = order_mints(token_x.mint, token_y.mint);
        let (token_a, token_b, price) = if mint_a == token_x.mint {
            (token_x, token_y, price)
        } else {
            (token_y, token_x, price.recip())
        };

        Self {
            pools_config,
            token_mint_a: token_a.mint,
            token_mint_b: token_b.mint,
            funder,
            token_vault_a: token_a.vault,
            token_vault_b: token_b.vault,
            tick_spacing,
            initial_sqrt_price: price_to_sqrt_price(price, token_a.decimals, token_b.decimals),
        }
    }
}

/// Build initialize_pool; pool and fee tier addresses are derived.
/// Mints must already be in canonical order.
pub fn initialize_pool_ix(program_id: &Pubkey, params: &InitializePoolParams) -> ClientResult<Instruction> {
    if !validate_token_order(&params.token_mint_a, &params.token_mint_b) {
        return Err(ClientError::InvalidTokenMintOrder {
            mint_a: params.token_mint_a,
            mint_b: params.token_mint_b,
        });
    }

    let (pool, pool_bump) = crate::pda::pool(
        program_id,
        &params.pools_config,
        &params.token_mint_a,
        &params.token_mint_b,
        params.tick_spacing,
    );
    let (fee_tier, _) = crate::pda::fee_tier(program_id, &params.pools_config, params.tick_spacing);

    Ok(Instruction {
        program_id: *program_id,
        accounts: crate::accounts::InitializePool {
            pools_config: params.pools_config,
            token_mint_a: params.token_mint_a,
            token_mint_b: params.token_mint_b,
            funder: params.funder,
            pool,
            token_vault_a: params.token_vault_a,
            token_vault_b: params.token_vault_b,
            fee_tier,
            token_program: anchor_spl::token::ID,
            system_program: anchor_lang::system_program::ID,
            rent: anchor_lang::solana_program::sysvar::rent::ID,
        }
        .to_account_metas(None),
        data: crate::instruction::InitializePool {
            bumps: ElysiumPoolBumps { pool_bump },
            tick_spacing: params.tick_spacing,
            initial_sqrt_price: params.initial_sqrt_price,
        }
        .data(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instructions::test_utils::sighash;
    use crate::math::full_math::Q64;

    fn params() -> InitializePoolParams {
        InitializePoolParams {
            pools_config: Pubkey::new_unique(),
            token_mint_a: Pubkey::new_from_array([1; 32]),
            token_mint_b: Pubkey::new_from_array([2; 32]),
            funder: Pubkey::new_unique(),
            token_vault_a: Pubkey::new_unique(),
            token_vault_b: Pubkey::new_unique(),
            tick_spacing: 64,
            initial_sqrt_price: Q64,
        }
    }

    #[test]
    fn test_initialize_pool_ix() {
        let params = params();
        let ix = initialize_pool_ix(&crate::ID, &params).unwrap();

        let (pool, bump) = crate::pda::pool(
            &crate::ID,
            &params.pools_config,
            &params.token_mint_a,
            &params.token_mint_b,
            64,
        );
        assert_eq!(ix.accounts.len(), 11);
        assert_eq!(ix.accounts[4].pubkey, pool);
        assert!(ix.accounts[4].is_writable && !ix.accounts[4].is_signer);
        assert!(ix.accounts[5].is_signer && ix.accounts[6].is_signer);
        assert_eq!(ix.accounts[7].pubkey, crate::pda::fee_tier(&crate::ID, &params.pools_config, 64).0);
        assert_eq!(ix.accounts[8].pubkey, anchor_spl::token::ID);

        // discriminator, bump, tick spacing, sqrt price
        assert_eq!(ix.data[..8], sighash("initialize_pool"));
        assert_eq!(ix.data[8], bump);
        assert_eq!(ix.data[9..11], 64u16.to_le_bytes());
        assert_eq!(ix.data[11..], Q64.to_le_bytes());
    }

    #[test]
    fn test_initialize_pool_rejects_unordered_mints() {
        let ordered = params();
        let swapped = InitializePoolParams {
            token_mint_a: ordered.token_mint_b,
            token_mint_b: ordered.token_mint_a,
            ..ordered
        };
        assert!(matches!(
            initialize_pool_ix(&crate::ID, &swapped),
            Err(ClientError::InvalidTokenMintOrder { .. })
        ));

        let same = InitializePoolParams {
            token_mint_b: ordered.token_mint_a,
            ..ordered
        };
        assert!(initialize_pool_ix(&crate::ID, &same).is_err());
    }

    #[test]
    fn test_from_price_orders_mints() {
        let low = PoolToken {
            mint: Pubkey::new_from_array([1; 32]),
            decimals: 6,
            vault: Pubkey::new_unique(),
        };
        let high = PoolToken {
            mint: Pubkey::new_from_array([2; 32]),
            decimals: 9,
            vault: Pubkey::new_unique(),
        };
        let pools_config = Pubkey::new_unique();
        let funder = Pubkey::new_unique();

        // 4000 of the 6-decimal token per 9-decimal token, given high first
        let flipped = InitializePoolParams::from_price(pools_config, funder, high, low, 64, 4000.0);
        assert_eq!(flipped.token_mint_a, low.mint);
        assert_eq!(flipped.token_mint_b, high.mint);
        assert_eq!(flipped.token_vault_a, low.vault);
        assert_eq!(flipped.token_vault_b, high.vault);
        // 1/4000 adjusted by 10^(9-6) is a raw price of 1/4, sqrt price 1/2
        assert!(flipped.initial_sqrt_price.abs_diff(Q64 / 2) < 1 << 20);
        assert!(initialize_pool_ix(&crate::ID, &flipped).is_ok());

        let ordered = InitializePoolParams::from_price(pools_config, funder, low, high, 64, 0.25e-3);
        assert_eq!(ordered.token_mint_a, low.mint);
        assert!(ordered.initial_sqrt_price.abs_diff(Q64 / 2) < 1 << 20);
    }
}
