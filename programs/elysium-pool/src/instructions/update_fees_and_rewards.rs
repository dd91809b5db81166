use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::{InstructionData, ToAccountMetas};

use crate::state::{ElysiumPool, Position, TickArray};

/// Checkpoint a position's owed fees and rewards without moving tokens.
/// The program rejects this for positions with zero liquidity.
#[derive(Accounts)]
pub struct UpdateFeesAndRewards<'info> {
    #[account(mut)]
    pub pool: Box<Account<'info, ElysiumPool>>,

    #[account(mut)]
    pub position: Box<Account<'info, Position>>,

    pub tick_array_lower: Box<Account<'info, TickArray>>,
    pub tick_array_upper: Box<Account<'info, TickArray>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateFeesAndRewardsParams {
    pub pool: Pubkey,
    pub position: Pubkey,
    pub tick_array_lower: Pubkey,
    pub tick_array_upper: Pubkey,
}

pub fn update_fees_and_rewards_ix(program_id: &Pubkey, params: &UpdateFeesAndRewardsParams) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: crate::accounts::UpdateFeesAndRewards {
            pool: params.pool,
            position: params.position,
            tick_array_lower: params.tick_array_lower,
            tick_array_upper: params.tick_array_upper,
        }
        .to_account_metas(None),
        data: crate::instruction::UpdateFeesAndRewards {}.data(),
    }
}
