use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::{InstructionData, ToAccountMetas};

use super::set_fee_rates::check_protocol_fee_rate;
use crate::errors::ClientResult;

/// Create the global pools config on a fresh keypair account
#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    /// New config account, signs for its own creation
    #[account(mut)]
    pub config: Signer<'info>,

    /// Pays rent for the config account
    #[account(mut)]
    pub funder: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitializeConfigParams {
    pub pools_config: Pubkey,
    pub funder: Pubkey,
    pub fee_authority: Pubkey,
    pub collect_protocol_fees_authority: Pubkey,
    pub reward_emissions_super_authority: Pubkey,
    pub default_protocol_fee_rate: u16,
}

pub fn initialize_config_ix(
    program_id: &Pubkey,
    params: &InitializeConfigParams,
) -> ClientResult<Instruction> {
    check_protocol_fee_rate(params.default_protocol_fee_rate)?;
    Ok(Instruction {
        program_id: *program_id,
        accounts: crate::accounts::InitializeConfig {
            config: params.pools_config,
            funder: params.funder,
            system_program: anchor_lang::system_program::ID,
        }
        .to_account_metas(None),
        data: crate::instruction::InitializeConfig {
            fee_authority: params.fee_authority,
            collect_protocol_fees_authority: params.collect_protocol_fees_authority,
            reward_emissions_super_authority: params.reward_emissions_super_authority,
            default_protocol_fee_rate: params.default_protocol_fee_rate,
        }
        .data(),
    })
}
