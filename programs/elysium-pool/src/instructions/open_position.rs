use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::{InstructionData, ToAccountMetas};
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::Token;

use crate::state::ElysiumPool;

/// Open a position and mint its NFT to the owner's associated token account
#[derive(Accounts)]
pub struct OpenPosition<'info> {
    #[account(mut)]
    pub funder: Signer<'info>,

    /// CHECK: receives the position NFT
    pub owner: UncheckedAccount<'info>,

    /// CHECK: position PDA, created by the program
    #[account(mut)]
    pub position: UncheckedAccount<'info>,

    /// New position mint keypair
    #[account(mut)]
    pub position_mint: Signer<'info>,

    /// CHECK: owner's associated token account for the position mint, created by the program
    #[account(mut)]
    pub position_token_account: UncheckedAccount<'info>,

    pub pool: Box<Account<'info, ElysiumPool>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

/// Same as OpenPosition, plus a Metaplex metadata account for the NFT
#[derive(Accounts)]
pub struct OpenPositionWithMetadata<'info> {
    #[account(mut)]
    pub funder: Signer<'info>,

    /// CHECK: receives the position NFT
    pub owner: UncheckedAccount<'info>,

    /// CHECK: position PDA, created by the program
    #[account(mut)]
    pub position: UncheckedAccount<'info>,

    #[account(mut)]
    pub position_mint: Signer<'info>,

    /// CHECK: metadata PDA, created through the metadata program
    #[account(mut)]
    pub position_metadata_account: UncheckedAccount<'info>,

    /// CHECK: owner's associated token account for the position mint, created by the program
    #[account(mut)]
    pub position_token_account: UncheckedAccount<'info>,

    pub pool: Box<Account<'info, ElysiumPool>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
    pub associated_token_program: Program<'info, AssociatedToken>,

    /// CHECK: token metadata program
    #[account(address = crate::constants::METADATA_PROGRAM_ID)]
    pub metadata_program: UncheckedAccount<'info>,

    /// CHECK: update authority set on the NFT metadata, verified by the program
    pub metadata_update_auth: UncheckedAccount<'info>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenPositionParams {
    pub funder: Pubkey,
    pub owner: Pubkey,
    pub position_mint: Pubkey,
    pub pool: Pubkey,
    pub tick_lower_index: i32,
    pub tick_upper_index: i32,
}

/// Derived addresses of a position opened with `position_mint`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionAddresses {
    pub position: Pubkey,
    pub position_bump: u8,
    pub position_token_account: Pubkey,
}

impl OpenPositionParams {
    pub fn addresses(&self, program_id: &Pubkey) -> PositionAddresses {
        let (position, position_bump) = crate::pda::position(program_id, &self.position_mint);
        PositionAddresses {
            position,
            position_bump,
            position_token_account: crate::pda::associated_token_address(&self.owner, &self.position_mint),
        }
    }
}

pub fn open_position_ix(program_id: &Pubkey, params: &OpenPositionParams) -> Instruction {
    let addresses = params.addresses(program_id);

    Instruction {
        program_id: *program_id,
        accounts: crate::accounts::OpenPosition {
            funder: params.funder,
            owner: params.owner,
            position: addresses.position,
            position_mint: params.position_mint,
            position_token_account: addresses.position_token_account,
            pool: params.pool,
            token_program: anchor_spl::token::ID,
            system_program: anchor_lang::system_program::ID,
            rent: anchor_lang::solana_program::sysvar::rent::ID,
            associated_token_program: anchor_spl::associated_token::ID,
        }
        .to_account_metas(None),
        data: crate::instruction::OpenPosition {
            // full path, derive(Accounts) generates a local OpenPositionBumps
            bumps: crate::state::OpenPositionBumps {
                position_bump: addresses.position_bump,
            },
            tick_lower_index: params.tick_lower_index,
            tick_upper_index: params.tick_upper_index,
        }
        .data(),
    }
}

pub fn open_position_with_metadata_ix(
    program_id: &Pubkey,
    params: &OpenPositionParams,
    metadata_update_auth: &Pubkey,
) -> Instruction {
    let addresses = params.addresses(program_id);
    let (position_metadata_account, metadata_bump) = crate::pda::position_metadata(&params.position_mint);

    Instruction {
        program_id: *program_id,
        accounts: crate::accounts::OpenPositionWithMetadata {
            funder: params.funder,
            owner: params.owner,
            position: addresses.position,
            position_mint: params.position_mint,
            position_metadata_account,
            position_token_account: addresses.position_token_account,
            pool: params.pool,
            token_program: anchor_spl::token::ID,
            system_program: anchor_lang::system_program::ID,
            rent: anchor_lang::solana_program::sysvar::rent::ID,
            associated_token_program: anchor_spl::associated_token::ID,
            metadata_program: crate::constants::METADATA_PROGRAM_ID,
            metadata_update_auth: *metadata_update_auth,
        }
        .to_account_metas(None),
        data: crate::instruction::OpenPositionWithMetadata {
            bumps: crate::state::OpenPositionWithMetadataBumps {
                position_bump: addresses.position_bump,
                metadata_bump,
            },
            tick_lower_index: params.tick_lower_index,
            tick_upper_index: params.tick_upper_index,
        }
        .data(),
    }
}
