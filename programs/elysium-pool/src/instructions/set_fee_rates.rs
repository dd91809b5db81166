//! Fee rate administration, all gated by the config's fee authority

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::{InstructionData, ToAccountMetas};

use crate::constants::{MAX_FEE_RATE, MAX_PROTOCOL_FEE_RATE};
use crate::errors::{ClientError, ClientResult};
use crate::state::{ElysiumPool, ElysiumPoolsConfig, FeeTier};

#[derive(Accounts)]
pub struct SetDefaultFeeRate<'info> {
    pub pools_config: Box<Account<'info, ElysiumPoolsConfig>>,

    #[account(mut)]
    pub fee_tier: Box<Account<'info, FeeTier>>,

    pub fee_authority: Signer<'info>,
}

#[derive(Accounts)]
pub struct SetDefaultProtocolFeeRate<'info> {
    #[account(mut)]
    pub pools_config: Box<Account<'info, ElysiumPoolsConfig>>,

    pub fee_authority: Signer<'info>,
}

#[derive(Accounts)]
pub struct SetFeeRate<'info> {
    pub pools_config: Box<Account<'info, ElysiumPoolsConfig>>,

    #[account(mut)]
    pub pool: Box<Account<'info, ElysiumPool>>,

    pub fee_authority: Signer<'info>,
}

#[derive(Accounts)]
pub struct SetProtocolFeeRate<'info> {
    pub pools_config: Box<Account<'info, ElysiumPoolsConfig>>,

    #[account(mut)]
    pub pool: Box<Account<'info, ElysiumPool>>,

    pub fee_authority: Signer<'info>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetDefaultFeeRateParams {
    pub pools_config: Pubkey,
    pub fee_authority: Pubkey,
    pub tick_spacing: u16,
    pub default_fee_rate: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetDefaultProtocolFeeRateParams {
    pub pools_config: Pubkey,
    pub fee_authority: Pubkey,
    pub default_protocol_fee_rate: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetFeeRateParams {
    pub pools_config: Pubkey,
    pub pool: Pubkey,
    pub fee_authority: Pubkey,
    pub fee_rate: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetProtocolFeeRateParams {
    pub pools_config: Pubkey,
    pub pool: Pubkey,
    pub fee_authority: Pubkey,
    pub protocol_fee_rate: u16,
}

/// Fee rates above MAX_FEE_RATE are rejected by the program
pub fn check_fee_rate(fee_rate: u16) -> ClientResult<()> {
    if fee_rate > MAX_FEE_RATE {
        return Err(ClientError::FeeRateMaxExceeded { fee_rate, max: MAX_FEE_RATE });
    }
    Ok(())
}

pub fn check_protocol_fee_rate(protocol_fee_rate: u16) -> ClientResult<()> {
    if protocol_fee_rate > MAX_PROTOCOL_FEE_RATE {
        return Err(ClientError::ProtocolFeeRateMaxExceeded {
            protocol_fee_rate,
            max: MAX_PROTOCOL_FEE_RATE,
        });
    }
    Ok(())
}

/// Change the fee rate new pools of a tier start with; the tier is found by tick spacing
pub fn set_default_fee_rate_ix(
    program_id: &Pubkey,
    params: &SetDefaultFeeRateParams,
) -> ClientResult<Instruction> {
    check_fee_rate(params.default_fee_rate)?;
    let (fee_tier, _) = crate::pda::fee_tier(program_id, &params.pools_config, params.tick_spacing);

    Ok(Instruction {
        program_id: *program_id,
        accounts: crate::accounts::SetDefaultFeeRate {
            pools_config: params.pools_config,
            fee_tier,
            fee_authority: params.fee_authority,
        }
        .to_account_metas(None),
        data: crate::instruction::SetDefaultFeeRate {
            default_fee_rate: params.default_fee_rate,
        }
        .data(),
    })
}

pub fn set_default_protocol_fee_rate_ix(
    program_id: &Pubkey,
    params: &SetDefaultProtocolFeeRateParams,
) -> ClientResult<Instruction> {
    check_protocol_fee_rate(params.default_protocol_fee_rate)?;
    Ok(Instruction {
        program_id: *program_id,
        accounts: crate::accounts::SetDefaultProtocolFeeRate {
            pools_config: params.pools_config,
            fee_authority: params.fee_authority,
        }
        .to_account_metas(None),
        data: crate::instruction::SetDefaultProtocolFeeRate {
            default_protocol_fee_rate: params.default_protocol_fee_rate,
        }
        .data(),
    })
}

pub fn set_fee_rate_ix(
    program_id: &Pubkey,
    params: &SetFeeRateParams,
) -> ClientResult<Instruction> {
    check_fee_rate(params.fee_rate)?;
    Ok(Instruction {
        program_id: *program_id,
        accounts: crate::accounts::SetFeeRate {
            pools_config: params.pools_config,
            pool: params.pool,
            fee_authority: params.fee_authority,
        }
        .to_account_metas(None),
        data: crate::instruction::SetFeeRate {
            fee_rate: params.fee_rate,
        }
        .data(),
    })
}

pub fn set_protocol_fee_rate_ix(
    program_id: &Pubkey,
    params: &SetProtocolFeeRateParams,
) -> ClientResult<Instruction> {
    check_protocol_fee_rate(params.protocol_fee_rate)?;
    Ok(Instruction {
        program_id: *program_id,
        accounts: crate::accounts::SetProtocolFeeRate {
            pools_config: params.pools_config,
            pool: params.pool,
            fee_authority: params.fee_authority,
        }
        .to_account_metas(None),
        data: crate::instruction::SetProtocolFeeRate {
            protocol_fee_rate: params.protocol_fee_rate,
        }
        .data(),
    })
}
