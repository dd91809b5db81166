//! Increase and decrease liquidity share one account layout

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::{InstructionData, ToAccountMetas};
use anchor_spl::token::{Token, TokenAccount};

use crate::state::{ElysiumPool, Position, TickArray};

#[derive(Accounts)]
pub struct ModifyLiquidity<'info> {
    #[account(mut)]
    pub pool: Box<Account<'info, ElysiumPool>>,

    pub token_program: Program<'info, Token>,

    /// Owner or delegate of the position NFT
    pub position_authority: Signer<'info>,

    #[account(mut)]
    pub position: Box<Account<'info, Position>>,

    pub position_token_account: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub token_owner_account_a: Box<Account<'info, TokenAccount>>,
    #[account(mut)]
    pub token_owner_account_b: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub token_vault_a: Box<Account<'info, TokenAccount>>,
    #[account(mut)]
    pub token_vault_b: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub tick_array_lower: Box<Account<'info, TickArray>>,
    #[account(mut)]
    pub tick_array_upper: Box<Account<'info, TickArray>>,
}

/// Accounts touched when liquidity of a position changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModifyLiquidityAccounts {
    pub pool: Pubkey,
    pub position_authority: Pubkey,
    pub position: Pubkey,
    pub position_token_account: Pubkey,
    pub token_owner_account_a: Pubkey,
    pub token_owner_account_b: Pubkey,
    pub token_vault_a: Pubkey,
    pub token_vault_b: Pubkey,
    pub tick_array_lower: Pubkey,
    pub tick_array_upper: Pubkey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncreaseLiquidityParams {
    pub accounts: ModifyLiquidityAccounts,
    pub liquidity_amount: u128,
    pub token_max_a: u64,
    pub token_max_b: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecreaseLiquidityParams {
    pub accounts: ModifyLiquidityAccounts,
    pub liquidity_amount: u128,
    pub token_min_a: u64,
    pub token_min_b: u64,
}

impl ModifyLiquidityAccounts {
    fn metas(&self) -> Vec<AccountMeta> {
        crate::accounts::ModifyLiquidity {
            pool: self.pool,
            token_program: anchor_spl::token::ID,
            position_authority: self.position_authority,
            position: self.position,
            position_token_account: self.position_token_account,
            token_owner_account_a: self.token_owner_account_a,
            token_owner_account_b: self.token_owner_account_b,
            token_vault_a: self.token_vault_a,
            token_vault_b: self.token_vault_b,
            tick_array_lower: self.tick_array_lower,
            tick_array_upper: self.tick_array_upper,
        }
        .to_account_metas(None)
    }
}

/// Deposit up to `token_max_a` / `token_max_b` for `liquidity_amount`
pub fn increase_liquidity_ix(program_id: &Pubkey, params: &IncreaseLiquidityParams) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: params.accounts.metas(),
        data: crate::instruction::IncreaseLiquidity {
            liquidity_amount: params.liquidity_amount,
            token_max_a: params.token_max_a,
            token_max_b: params.token_max_b,
        }
        .data(),
    }
}

/// Withdraw `liquidity_amount`, receiving at least `token_min_a` / `token_min_b`
pub fn decrease_liquidity_ix(program_id: &Pubkey, params: &DecreaseLiquidityParams) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: params.accounts.metas(),
        data: crate::instruction::DecreaseLiquidity {
            liquidity_amount: params.liquidity_amount,
            token_min_a: params.token_min_a,
            token_min_b: params.token_min_b,
        }
        .data(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instructions::test_utils::sighash;

    fn accounts() -> ModifyLiquidityAccounts {
        ModifyLiquidityAccounts {
            pool: Pubkey::new_unique(),
            position_authority: Pubkey::new_unique(),
            position: Pubkey::new_unique(),
            position_token_account: Pubkey::new_unique(),
            token_owner_account_a: Pubkey::new_unique(),
            token_owner_account_b: Pubkey::new_unique(),
            token_vault_a: Pubkey::new_unique(),
            token_vault_b: Pubkey::new_unique(),
            tick_array_lower: Pubkey::new_unique(),
            tick_array_upper: Pubkey::new_unique(),
        }
    }

    #[test]
    fn test_increase_liquidity_layout() {
        let accounts = accounts();
        let ix = increase_liquidity_ix(
            &crate::ID,
            &IncreaseLiquidityParams {
                accounts,
                liquidity_amount: 1_000_000,
                token_max_a: 10,
                token_max_b: 20,
            },
        );

        let writable: Vec<bool> = ix.accounts.iter().map(|m| m.is_writable).collect();
        assert_eq!(
            writable,
            vec![true, false, false, true, false, true, true, true, true, true, true]
        );
        assert_eq!(ix.accounts[1].pubkey, anchor_spl::token::ID);
        assert!(ix.accounts[2].is_signer);
        assert_eq!(ix.accounts.iter().filter(|m| m.is_signer).count(), 1);

        assert_eq!(ix.data[..8], sighash("increase_liquidity"));
        assert_eq!(ix.data[8..24], 1_000_000u128.to_le_bytes());
        assert_eq!(ix.data[24..32], 10u64.to_le_bytes());
        assert_eq!(ix.data[32..], 20u64.to_le_bytes());
    }

    #[test]
    fn test_decrease_liquidity_shares_accounts() {
        let accounts = accounts();
        let increase = increase_liquidity_ix(
            &crate::ID,
            &IncreaseLiquidityParams { accounts, liquidity_amount: 1, token_max_a: 0, token_max_b: 0 },
        );
        let decrease = decrease_liquidity_ix(
            &crate::ID,
            &DecreaseLiquidityParams { accounts, liquidity_amount: 1, token_min_a: 0, token_min_b: 0 },
        );

        assert_eq!(increase.accounts, decrease.accounts);
        assert_eq!(decrease.data[..8], sighash("decrease_liquidity"));
    }
}
