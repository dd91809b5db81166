use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::{InstructionData, ToAccountMetas};
use anchor_spl::token::{Token, TokenAccount};

use crate::state::{ElysiumPool, TickArray};

/// Route through two pools sharing an intermediary mint in one instruction
#[derive(Accounts)]
pub struct TwoHopSwap<'info> {
    pub token_program: Program<'info, Token>,

    pub token_authority: Signer<'info>,

    #[account(mut)]
    pub pool_one: Box<Account<'info, ElysiumPool>>,
    #[account(mut)]
    pub pool_two: Box<Account<'info, ElysiumPool>>,

    #[account(mut)]
    pub token_owner_account_one_a: Box<Account<'info, TokenAccount>>,
    #[account(mut)]
    pub token_vault_one_a: Box<Account<'info, TokenAccount>>,
    #[account(mut)]
    pub token_owner_account_one_b: Box<Account<'info, TokenAccount>>,
    #[account(mut)]
    pub token_vault_one_b: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub token_owner_account_two_a: Box<Account<'info, TokenAccount>>,
    #[account(mut)]
    pub token_vault_two_a: Box<Account<'info, TokenAccount>>,
    #[account(mut)]
    pub token_owner_account_two_b: Box<Account<'info, TokenAccount>>,
    #[account(mut)]
    pub token_vault_two_b: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub tick_array_one_0: Box<Account<'info, TickArray>>,
    #[account(mut)]
    pub tick_array_one_1: Box<Account<'info, TickArray>>,
    #[account(mut)]
    pub tick_array_one_2: Box<Account<'info, TickArray>>,

    #[account(mut)]
    pub tick_array_two_0: Box<Account<'info, TickArray>>,
    #[account(mut)]
    pub tick_array_two_1: Box<Account<'info, TickArray>>,
    #[account(mut)]
    pub tick_array_two_2: Box<Account<'info, TickArray>>,

    /// CHECK: oracle PDA of pool one
    pub oracle_one: UncheckedAccount<'info>,

    /// CHECK: oracle PDA of pool two
    pub oracle_two: UncheckedAccount<'info>,
}

/// Pool side accounts of one hop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapHopAccounts {
    pub pool: Pubkey,
    pub token_owner_account_a: Pubkey,
    pub token_vault_a: Pubkey,
    pub token_owner_account_b: Pubkey,
    pub token_vault_b: Pubkey,
    pub tick_arrays: [Pubkey; 3],
    pub oracle: Pubkey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwoHopSwapParams {
    pub token_authority: Pubkey,
    pub hop_one: SwapHopAccounts,
    pub hop_two: SwapHopAccounts,
    pub amount: u64,
    pub other_amount_threshold: u64,
    pub amount_specified_is_input: bool,
    pub a_to_b_one: bool,
    pub a_to_b_two: bool,
    pub sqrt_price_limit_one: u128,
    pub sqrt_price_limit_two: u128,
}

pub fn two_hop_swap_ix(program_id: &Pubkey, params: &TwoHopSwapParams) -> Instruction {
    let one = &params.hop_one;
    let two = &params.hop_two;

    Instruction {
        program_id: *program_id,
        accounts: crate::accounts::TwoHopSwap {
            token_program: anchor_spl::token::ID,
            token_authority: params.token_authority,
            pool_one: one.pool,
            pool_two: two.pool,
            token_owner_account_one_a: one.token_owner_account_a,
            token_vault_one_a: one.token_vault_a,
            token_owner_account_one_b: one.token_owner_account_b,
            token_vault_one_b: one.token_vault_b,
            token_owner_account_two_a: two.token_owner_account_a,
            token_vault_two_a: two.token_vault_a,
            token_owner_account_two_b: two.token_owner_account_b,
            token_vault_two_b: two.token_vault_b,
            tick_array_one_0: one.tick_arrays[0],
            tick_array_one_1: one.tick_arrays[1],
            tick_array_one_2: one.tick_arrays[2],
            tick_array_two_0: two.tick_arrays[0],
            tick_array_two_1: two.tick_arrays[1],
            tick_array_two_2: two.tick_arrays[2],
            oracle_one: one.oracle,
            oracle_two: two.oracle,
        }
        .to_account_metas(None),
        data: crate::instruction::TwoHopSwap {
            amount: params.amount,
            other_amount_threshold: params.other_amount_threshold,
            amount_specified_is_input: params.amount_specified_is_input,
            a_to_b_one: params.a_to_b_one,
            a_to_b_two: params.a_to_b_two,
            sqrt_price_limit_one: params.sqrt_price_limit_one,
            sqrt_price_limit_two: params.sqrt_price_limit_two,
        }
        .data(),
    }
}
