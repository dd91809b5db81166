use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::{InstructionData, ToAccountMetas};
use anchor_spl::token::{Token, TokenAccount};

use crate::state::{ElysiumPool, ElysiumPoolsConfig};

/// Withdraw the protocol's share of pool fees
#[derive(Accounts)]
pub struct CollectProtocolFees<'info> {
    pub pools_config: Box<Account<'info, ElysiumPoolsConfig>>,

    #[account(mut)]
    pub pool: Box<Account<'info, ElysiumPool>>,

    /// Must be the config's collect protocol fees authority
    pub collect_protocol_fees_authority: Signer<'info>,

    #[account(mut)]
    pub token_vault_a: Box<Account<'info, TokenAccount>>,
    #[account(mut)]
    pub token_vault_b: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub token_destination_a: Box<Account<'info, TokenAccount>>,
    #[account(mut)]
    pub token_destination_b: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectProtocolFeesParams {
    pub pools_config: Pubkey,
    pub pool: Pubkey,
    pub collect_protocol_fees_authority: Pubkey,
    pub token_vault_a: Pubkey,
    pub token_vault_b: Pubkey,
    pub token_destination_a: Pubkey,
    pub token_destination_b: Pubkey,
}

pub fn collect_protocol_fees_ix(program_id: &Pubkey, params: &CollectProtocolFeesParams) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: crate::accounts::CollectProtocolFees {
            pools_config: params.pools_config,
            pool: params.pool,
            collect_protocol_fees_authority: params.collect_protocol_fees_authority,
            token_vault_a: params.token_vault_a,
            token_vault_b: params.token_vault_b,
            token_destination_a: params.token_destination_a,
            token_destination_b: params.token_destination_b,
            token_program: anchor_spl::token::ID,
        }
        .to_account_metas(None),
        data: crate::instruction::CollectProtocolFees {}.data(),
    }
}
