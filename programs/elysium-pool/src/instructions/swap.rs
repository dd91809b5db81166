use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::{InstructionData, ToAccountMetas};
use anchor_spl::token::{Token, TokenAccount};

use crate::state::{ElysiumPool, TickArray};

/// Swap against a single pool across up to three tick arrays
#[derive(Accounts)]
pub struct Swap<'info> {
    pub token_program: Program<'info, Token>,

    pub token_authority: Signer<'info>,

    #[account(mut)]
    pub pool: Box<Account<'info, ElysiumPool>>,

    #[account(mut)]
    pub token_owner_account_a: Box<Account<'info, TokenAccount>>,
    #[account(mut)]
    pub token_vault_a: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub token_owner_account_b: Box<Account<'info, TokenAccount>>,
    #[account(mut)]
    pub token_vault_b: Box<Account<'info, TokenAccount>>,

    /// Array holding the current tick, then the next two in swap direction
    #[account(mut)]
    pub tick_array_0: Box<Account<'info, TickArray>>,
    #[account(mut)]
    pub tick_array_1: Box<Account<'info, TickArray>>,
    #[account(mut)]
    pub tick_array_2: Box<Account<'info, TickArray>>,

    /// CHECK: oracle PDA, unused by the program but part of its interface
    pub oracle: UncheckedAccount<'info>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapParams {
    pub pool: Pubkey,
    pub token_authority: Pubkey,
    pub token_owner_account_a: Pubkey,
    pub token_vault_a: Pubkey,
    pub token_owner_account_b: Pubkey,
    pub token_vault_b: Pubkey,
    pub tick_array_0: Pubkey,
    pub tick_array_1: Pubkey,
    pub tick_array_2: Pubkey,
    pub oracle: Pubkey,
    /// Exact input if `amount_specified_is_input`, else exact output
    pub amount: u64,
    /// Minimum output for exact input, maximum input for exact output
    pub other_amount_threshold: u64,
    pub sqrt_price_limit: u128,
    pub amount_specified_is_input: bool,
    pub a_to_b: bool,
}

pub fn swap_ix(program_id: &Pubkey, params: &SwapParams) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: crate::accounts::Swap {
            token_program: anchor_spl::token::ID,
            token_authority: params.token_authority,
            pool: params.pool,
            token_owner_account_a: params.token_owner_account_a,
            token_vault_a: params.token_vault_a,
            token_owner_account_b: params.token_owner_account_b,
            token_vault_b: params.token_vault_b,
            tick_array_0: params.tick_array_0,
            tick_array_1: params.tick_array_1,
            tick_array_2: params.tick_array_2,
            oracle: params.oracle,
        }
        .to_account_metas(None),
        data: crate::instruction::Swap {
            amount: params.amount,
            other_amount_threshold: params.other_amount_threshold,
            sqrt_price_limit: params.sqrt_price_limit,
            amount_specified_is_input: params.amount_specified_is_input,
            a_to_b: params.a_to_b,
        }
        .data(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instructions::test_utils::sighash;

    #[test]
    fn test_swap_ix_layout() {
        let params = SwapParams {
            pool: Pubkey::new_unique(),
            token_authority: Pubkey::new_unique(),
            token_owner_account_a: Pubkey::new_unique(),
            token_vault_a: Pubkey::new_unique(),
            token_owner_account_b: Pubkey::new_unique(),
            token_vault_b: Pubkey::new_unique(),
            tick_array_0: Pubkey::new_unique(),
            tick_array_1: Pubkey::new_unique(),
            tick_array_2: Pubkey::new_unique(),
            oracle: Pubkey::new_unique(),
            amount: 5_000,
            other_amount_threshold: 4_900,
            sqrt_price_limit: crate::constants::MIN_SQRT_PRICE_X64,
            amount_specified_is_input: true,
            a_to_b: true,
        };
        let ix = swap_ix(&crate::ID, &params);

        assert_eq!(ix.accounts.len(), 11);
        assert_eq!(ix.accounts[0].pubkey, anchor_spl::token::ID);
        assert!(ix.accounts[1].is_signer);
        assert!(ix.accounts[2..10].iter().all(|m| m.is_writable));
        assert!(!ix.accounts[10].is_writable);

        // u64, u64, u128, bool, bool
        assert_eq!(ix.data.len(), 8 + 8 + 8 + 16 + 1 + 1);
        assert_eq!(ix.data[..8], sighash("swap"));
        assert_eq!(ix.data[8..16], 5_000u64.to_le_bytes());
        assert_eq!(ix.data[16..24], 4_900u64.to_le_bytes());
        assert_eq!(ix.data[24..40], crate::constants::MIN_SQRT_PRICE_X64.to_le_bytes());
        assert_eq!(ix.data[40..], [1u8, 1u8]);
    }
}
