use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::{InstructionData, ToAccountMetas};

use super::set_fee_rates::check_fee_rate;
use crate::errors::ClientResult;
use crate::state::ElysiumPoolsConfig;

/// Create a fee tier for a tick spacing
#[derive(Accounts)]
pub struct InitializeFeeTier<'info> {
    pub config: Box<Account<'info, ElysiumPoolsConfig>>,

    /// CHECK: fee tier PDA, created by the program
    #[account(mut)]
    pub fee_tier: UncheckedAccount<'info>,

    #[account(mut)]
    pub funder: Signer<'info>,

    /// Must be the config's fee authority
    pub fee_authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitializeFeeTierParams {
    pub pools_config: Pubkey,
    pub funder: Pubkey,
    pub fee_authority: Pubkey,
    pub tick_spacing: u16,
    pub default_fee_rate: u16,
}

/// The fee tier address is derived from the config and tick spacing
pub fn initialize_fee_tier_ix(
    program_id: &Pubkey,
    params: &InitializeFeeTierParams,
) -> ClientResult<Instruction> {
    check_fee_rate(params.default_fee_rate)?;
    let (fee_tier, _) = crate::pda::fee_tier(program_id, &params.pools_config, params.tick_spacing);

    Ok(Instruction {
        program_id: *program_id,
        accounts: crate::accounts::InitializeFeeTier {
            config: params.pools_config,
            fee_tier,
            funder: params.funder,
            fee_authority: params.fee_authority,
            system_program: anchor_lang::system_program::ID,
        }
        .to_account_metas(None),
        data: crate::instruction::InitializeFeeTier {
            tick_spacing: params.tick_spacing,
            default_fee_rate: params.default_fee_rate,
        }
        .data(),
    })
}
