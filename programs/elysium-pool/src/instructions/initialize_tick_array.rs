use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::{InstructionData, ToAccountMetas};

use crate::state::ElysiumPool;

#[derive(Accounts)]
pub struct InitializeTickArray<'info> {
    pub pool: Box<Account<'info, ElysiumPool>>,

    #[account(mut)]
    pub funder: Signer<'info>,

    /// CHECK: tick array PDA, created by the program
    #[account(mut)]
    pub tick_array: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitializeTickArrayParams {
    pub pool: Pubkey,
    pub funder: Pubkey,
    pub start_tick_index: i32,
}

pub fn initialize_tick_array_ix(program_id: &Pubkey, params: &InitializeTickArrayParams) -> Instruction {
    let (tick_array, _) = crate::pda::tick_array(program_id, &params.pool, params.start_tick_index);

    Instruction {
        program_id: *program_id,
        accounts: crate::accounts::InitializeTickArray {
            pool: params.pool,
            funder: params.funder,
            tick_array,
            system_program: anchor_lang::system_program::ID,
        }
        .to_account_metas(None),
        data: crate::instruction::InitializeTickArray {
            start_tick_index: params.start_tick_index,
        }
        .data(),
    }
}
