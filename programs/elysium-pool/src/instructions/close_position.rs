use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::{InstructionData, ToAccountMetas};
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::state::Position;

/// Close an empty position, burning its NFT and returning rent to `receiver`
#[derive(Accounts)]
pub struct ClosePosition<'info> {
    pub position_authority: Signer<'info>,

    /// CHECK: receives the reclaimed rent
    #[account(mut)]
    pub receiver: UncheckedAccount<'info>,

    #[account(mut)]
    pub position: Box<Account<'info, Position>>,

    #[account(mut)]
    pub position_mint: Box<Account<'info, Mint>>,

    #[account(mut)]
    pub position_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClosePositionParams {
    pub position_authority: Pubkey,
    pub receiver: Pubkey,
    pub position: Pubkey,
    pub position_mint: Pubkey,
    pub position_token_account: Pubkey,
}

pub fn close_position_ix(program_id: &Pubkey, params: &ClosePositionParams) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: crate::accounts::ClosePosition {
            position_authority: params.position_authority,
            receiver: params.receiver,
            position: params.position,
            position_mint: params.position_mint,
            position_token_account: params.position_token_account,
            token_program: anchor_spl::token::ID,
        }
        .to_account_metas(None),
        data: crate::instruction::ClosePosition {}.data(),
    }
}
