use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::{InstructionData, ToAccountMetas};
use anchor_spl::token::{Token, TokenAccount};

use crate::errors::ClientResult;
use crate::instructions::check_reward_index;
use crate::state::{ElysiumPool, Position};

/// Collect the owed amount of one reward slot
#[derive(Accounts)]
pub struct CollectReward<'info> {
    pub pool: Box<Account<'info, ElysiumPool>>,

    pub position_authority: Signer<'info>,

    #[account(mut)]
    pub position: Box<Account<'info, Position>>,

    pub position_token_account: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub reward_owner_account: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub reward_vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectRewardParams {
    pub pool: Pubkey,
    pub position_authority: Pubkey,
    pub position: Pubkey,
    pub position_token_account: Pubkey,
    pub reward_owner_account: Pubkey,
    pub reward_vault: Pubkey,
    pub reward_index: u8,
}

pub fn collect_reward_ix(program_id: &Pubkey, params: &CollectRewardParams) -> ClientResult<Instruction> {
    check_reward_index(params.reward_index)?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: crate::accounts::CollectReward {
            pool: params.pool,
            position_authority: params.position_authority,
            position: params.position,
            position_token_account: params.position_token_account,
            reward_owner_account: params.reward_owner_account,
            reward_vault: params.reward_vault,
            token_program: anchor_spl::token::ID,
        }
        .to_account_metas(None),
        data: crate::instruction::CollectReward {
            reward_index: params.reward_index,
        }
        .data(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ClientError;
    use crate::instructions::test_utils::sighash;

    fn params(reward_index: u8) -> CollectRewardParams {
        CollectRewardParams {
            pool: Pubkey::new_unique(),
            position_authority: Pubkey::new_unique(),
            position: Pubkey::new_unique(),
            position_token_account: Pubkey::new_unique(),
            reward_owner_account: Pubkey::new_unique(),
            reward_vault: Pubkey::new_unique(),
            reward_index,
        }
    }

    #[test]
    fn test_collect_reward_ix() {
        let params = params(2);
        let ix = collect_reward_ix(&crate::ID, &params).unwrap();

        assert_eq!(ix.accounts.len(), 7);
        assert!(ix.accounts[1].is_signer);
        assert!(ix.accounts[4].is_writable && ix.accounts[5].is_writable);
        assert_eq!(ix.accounts[5].pubkey, params.reward_vault);

        let mut expected = sighash("collect_reward").to_vec();
        expected.push(2);
        assert_eq!(ix.data, expected);
    }

    #[test]
    fn test_collect_reward_rejects_index_out_of_range() {
        assert!(matches!(
            collect_reward_ix(&crate::ID, &params(3)),
            Err(ClientError::InvalidRewardIndex(3))
        ));
    }
}
