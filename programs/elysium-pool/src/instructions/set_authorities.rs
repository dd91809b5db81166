//! Authority rotation for the config and per-slot reward authorities

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::{InstructionData, ToAccountMetas};

use crate::errors::ClientResult;
use crate::instructions::check_reward_index;
use crate::state::{ElysiumPool, ElysiumPoolsConfig};

#[derive(Accounts)]
pub struct SetFeeAuthority<'info> {
    #[account(mut)]
    pub pools_config: Box<Account<'info, ElysiumPoolsConfig>>,

    pub fee_authority: Signer<'info>,

    /// CHECK: any key may become the new authority
    pub new_fee_authority: UncheckedAccount<'info>,
}

#[derive(Accounts)]
pub struct SetCollectProtocolFeesAuthority<'info> {
    #[account(mut)]
    pub pools_config: Box<Account<'info, ElysiumPoolsConfig>>,

    pub collect_protocol_fees_authority: Signer<'info>,

    /// CHECK: any key may become the new authority
    pub new_collect_protocol_fees_authority: UncheckedAccount<'info>,
}

#[derive(Accounts)]
pub struct SetRewardAuthority<'info> {
    #[account(mut)]
    pub pool: Box<Account<'info, ElysiumPool>>,

    pub reward_authority: Signer<'info>,

    /// CHECK: any key may become the new authority
    pub new_reward_authority: UncheckedAccount<'info>,
}

#[derive(Accounts)]
pub struct SetRewardAuthorityBySuperAuthority<'info> {
    pub pools_config: Box<Account<'info, ElysiumPoolsConfig>>,

    #[account(mut)]
    pub pool: Box<Account<'info, ElysiumPool>>,

    pub reward_emissions_super_authority: Signer<'info>,

    /// CHECK: any key may become the new authority
    pub new_reward_authority: UncheckedAccount<'info>,
}

#[derive(Accounts)]
pub struct SetRewardEmissionsSuperAuthority<'info> {
    #[account(mut)]
    pub pools_config: Box<Account<'info, ElysiumPoolsConfig>>,

    pub reward_emissions_super_authority: Signer<'info>,

    /// CHECK: any key may become the new authority
    pub new_reward_emissions_super_authority: UncheckedAccount<'info>,
}

/// Config level authority change: current authority signs, the new one does not
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetConfigAuthorityParams {
    pub pools_config: Pubkey,
    pub authority: Pubkey,
    pub new_authority: Pubkey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetRewardAuthorityParams {
    pub pool: Pubkey,
    pub reward_authority: Pubkey,
    pub new_reward_authority: Pubkey,
    pub reward_index: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetRewardAuthorityBySuperAuthorityParams {
    pub pools_config: Pubkey,
    pub pool: Pubkey,
    pub reward_emissions_super_authority: Pubkey,
    pub new_reward_authority: Pubkey,
    pub reward_index: u8,
}

pub fn set_fee_authority_ix(program_id: &Pubkey, params: &SetConfigAuthorityParams) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: crate::accounts::SetFeeAuthority {
            pools_config: params.pools_config,
            fee_authority: params.authority,
            new_fee_authority: params.new_authority,
        }
        .to_account_metas(None),
        data: crate::instruction::SetFeeAuthority {}.data(),
    }
}

pub fn set_collect_protocol_fees_authority_ix(
    program_id: &Pubkey,
    params: &SetConfigAuthorityParams,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: crate::accounts::SetCollectProtocolFeesAuthority {
            pools_config: params.pools_config,
            collect_protocol_fees_authority: params.authority,
            new_collect_protocol_fees_authority: params.new_authority,
        }
        .to_account_metas(None),
        data: crate::instruction::SetCollectProtocolFeesAuthority {}.data(),
    }
}

pub fn set_reward_emissions_super_authority_ix(
    program_id: &Pubkey,
    params: &SetConfigAuthorityParams,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: crate::accounts::SetRewardEmissionsSuperAuthority {
            pools_config: params.pools_config,
            reward_emissions_super_authority: params.authority,
            new_reward_emissions_super_authority: params.new_authority,
        }
        .to_account_metas(None),
        data: crate::instruction::SetRewardEmissionsSuperAuthority {}.data(),
    }
}

pub fn set_reward_authority_ix(
    program_id: &Pubkey,
    params: &SetRewardAuthorityParams,
) -> ClientResult<Instruction> {
    check_reward_index(params.reward_index)?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: crate::accounts::SetRewardAuthority {
            pool: params.pool,
            reward_authority: params.reward_authority,
            new_reward_authority: params.new_reward_authority,
        }
        .to_account_metas(None),
        data: crate::instruction::SetRewardAuthority {
            reward_index: params.reward_index,
        }
        .data(),
    })
}

pub fn set_reward_authority_by_super_authority_ix(
    program_id: &Pubkey,
    params: &SetRewardAuthorityBySuperAuthorityParams,
) -> ClientResult<Instruction> {
    check_reward_index(params.reward_index)?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: crate::accounts::SetRewardAuthorityBySuperAuthority {
            pools_config: params.pools_config,
            pool: params.pool,
            reward_emissions_super_authority: params.reward_emissions_super_authority,
            new_reward_authority: params.new_reward_authority,
        }
        .to_account_metas(None),
        data: crate::instruction::SetRewardAuthorityBySuperAuthority {
            reward_index: params.reward_index,
        }
        .data(),
    })
}
