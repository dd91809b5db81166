//! Reward slot setup and emission rate changes

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::{InstructionData, ToAccountMetas};
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::errors::ClientResult;
use crate::instructions::check_reward_index;
use crate::state::ElysiumPool;

#[derive(Accounts)]
pub struct InitializeReward<'info> {
    /// Current authority of the reward slot
    pub reward_authority: Signer<'info>,

    #[account(mut)]
    pub funder: Signer<'info>,

    #[account(mut)]
    pub pool: Box<Account<'info, ElysiumPool>>,

    pub reward_mint: Box<Account<'info, Mint>>,

    /// New reward vault keypair
    #[account(mut)]
    pub reward_vault: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[derive(Accounts)]
pub struct SetRewardEmissions<'info> {
    #[account(mut)]
    pub pool: Box<Account<'info, ElysiumPool>>,

    pub reward_authority: Signer<'info>,

    /// Checked against the slot's vault; must hold a day of emissions
    pub reward_vault: Box<Account<'info, TokenAccount>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitializeRewardParams {
    pub reward_authority: Pubkey,
    pub funder: Pubkey,
    pub pool: Pubkey,
    pub reward_mint: Pubkey,
    pub reward_vault: Pubkey,
    pub reward_index: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetRewardEmissionsParams {
    pub pool: Pubkey,
    pub reward_authority: Pubkey,
    pub reward_vault: Pubkey,
    pub reward_index: u8,
    pub emissions_per_second_x64: u128,
}

pub fn initialize_reward_ix(program_id: &Pubkey, params: &InitializeRewardParams) -> ClientResult<Instruction> {
    check_reward_index(params.reward_index)?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: crate::accounts::InitializeReward {
            reward_authority: params.reward_authority,
            funder: params.funder,
            pool: params.pool,
            reward_mint: params.reward_mint,
            reward_vault: params.reward_vault,
            token_program: anchor_spl::token::ID,
            system_program: anchor_lang::system_program::ID,
            rent: anchor_lang::solana_program::sysvar::rent::ID,
        }
        .to_account_metas(None),
        data: crate::instruction::InitializeReward {
            reward_index: params.reward_index,
        }
        .data(),
    })
}

pub fn set_reward_emissions_ix(
    program_id: &Pubkey,
    params: &SetRewardEmissionsParams,
) -> ClientResult<Instruction> {
    check_reward_index(params.reward_index)?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: crate::accounts::SetRewardEmissions {
            pool: params.pool,
            reward_authority: params.reward_authority,
            reward_vault: params.reward_vault,
        }
        .to_account_metas(None),
        data: crate::instruction::SetRewardEmissions {
            reward_index: params.reward_index,
            emissions_per_second_x64: params.emissions_per_second_x64,
        }
        .data(),
    })
}
