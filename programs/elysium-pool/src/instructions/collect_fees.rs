use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::{InstructionData, ToAccountMetas};
use anchor_spl::token::{Token, TokenAccount};

use crate::state::{ElysiumPool, Position};

/// Collect accumulated fees from a position
#[derive(Accounts)]
pub struct CollectFees<'info> {
    pub pool: Box<Account<'info, ElysiumPool>>,

    /// Owner or delegate of the position NFT
    pub position_authority: Signer<'info>,

    #[account(mut)]
    pub position: Box<Account<'info, Position>>,

    /// Token account holding the position NFT
    pub position_token_account: Box<Account<'info, TokenAccount>>,

    /// Destination for token A
    #[account(mut)]
    pub token_owner_account_a: Box<Account<'info, TokenAccount>>,

    /// Pool vault for token A
    #[account(mut)]
    pub token_vault_a: Box<Account<'info, TokenAccount>>,

    /// Destination for token B
    #[account(mut)]
    pub token_owner_account_b: Box<Account<'info, TokenAccount>>,

    /// Pool vault for token B
    #[account(mut)]
    pub token_vault_b: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectFeesParams {
    pub pool: Pubkey,
    pub position_authority: Pubkey,
    pub position: Pubkey,
    pub position_token_account: Pubkey,
    pub token_owner_account_a: Pubkey,
    pub token_vault_a: Pubkey,
    pub token_owner_account_b: Pubkey,
    pub token_vault_b: Pubkey,
}

/// Transfers everything owed; call update_fees_and_rewards first to include fees accrued
/// since the last checkpoint.
pub fn collect_fees_ix(program_id: &Pubkey, params: &CollectFeesParams) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: crate::accounts::CollectFees {
            pool: params.pool,
            position_authority: params.position_authority,
            position: params.position,
            position_token_account: params.position_token_account,
            token_owner_account_a: params.token_owner_account_a,
            token_vault_a: params.token_vault_a,
            token_owner_account_b: params.token_owner_account_b,
            token_vault_b: params.token_vault_b,
            token_program: anchor_spl::token::ID,
        }
        .to_account_metas(None),
        data: crate::instruction::CollectFees {}.data(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instructions::test_utils::sighash;

    #[test]
    fn test_collect_fees_ix() {
        let params = CollectFeesParams {
            pool: Pubkey::new_unique(),
            position_authority: Pubkey::new_unique(),
            position: Pubkey::new_unique(),
            position_token_account: Pubkey::new_unique(),
            token_owner_account_a: Pubkey::new_unique(),
            token_vault_a: Pubkey::new_unique(),
            token_owner_account_b: Pubkey::new_unique(),
            token_vault_b: Pubkey::new_unique(),
        };
        let ix = collect_fees_ix(&crate::ID, &params);

        let expected = [
            (params.pool, false, false),
            (params.position_authority, false, true),
            (params.position, true, false),
            (params.position_token_account, false, false),
            (params.token_owner_account_a, true, false),
            (params.token_vault_a, true, false),
            (params.token_owner_account_b, true, false),
            (params.token_vault_b, true, false),
            (anchor_spl::token::ID, false, false),
        ];
        assert_eq!(ix.accounts.len(), expected.len());
        for (meta, (pubkey, writable, signer)) in ix.accounts.iter().zip(expected) {
            assert_eq!(meta.pubkey, pubkey);
            assert_eq!(meta.is_writable, writable);
            assert_eq!(meta.is_signer, signer);
        }

        assert_eq!(ix.program_id, crate::ID);
        assert_eq!(ix.data, sighash("collect_fees").to_vec());
    }
}
