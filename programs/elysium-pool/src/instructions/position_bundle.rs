//! Position bundles: one NFT addressing up to POSITION_BUNDLE_SIZE positions

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::{InstructionData, ToAccountMetas};
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::state::PositionBundle;

#[derive(Accounts)]
pub struct InitializePositionBundle<'info> {
    /// CHECK: position bundle PDA, created by the program
    #[account(mut)]
    pub position_bundle: UncheckedAccount<'info>,

    #[account(mut)]
    pub position_bundle_mint: Signer<'info>,

    /// CHECK: owner's associated token account for the bundle mint
    #[account(mut)]
    pub position_bundle_token_account: UncheckedAccount<'info>,

    /// CHECK: receives the bundle NFT
    pub position_bundle_owner: UncheckedAccount<'info>,

    #[account(mut)]
    pub funder: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

#[derive(Accounts)]
pub struct InitializePositionBundleWithMetadata<'info> {
    /// CHECK: position bundle PDA, created by the program
    #[account(mut)]
    pub position_bundle: UncheckedAccount<'info>,

    #[account(mut)]
    pub position_bundle_mint: Signer<'info>,

    /// CHECK: metadata PDA, created through the metadata program
    #[account(mut)]
    pub position_bundle_metadata: UncheckedAccount<'info>,

    /// CHECK: owner's associated token account for the bundle mint
    #[account(mut)]
    pub position_bundle_token_account: UncheckedAccount<'info>,

    /// CHECK: receives the bundle NFT
    pub position_bundle_owner: UncheckedAccount<'info>,

    #[account(mut)]
    pub funder: Signer<'info>,

    /// CHECK: update authority set on the NFT metadata, verified by the program
    pub metadata_update_auth: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
    pub associated_token_program: Program<'info, AssociatedToken>,

    /// CHECK: token metadata program
    #[account(address = crate::constants::METADATA_PROGRAM_ID)]
    pub metadata_program: UncheckedAccount<'info>,
}

/// Burn the bundle NFT and close the bundle. Every bundle index must be free.
#[derive(Accounts)]
pub struct DeletePositionBundle<'info> {
    #[account(mut)]
    pub position_bundle: Box<Account<'info, PositionBundle>>,

    #[account(mut)]
    pub position_bundle_mint: Box<Account<'info, Mint>>,

    #[account(mut)]
    pub position_bundle_token_account: Box<Account<'info, TokenAccount>>,

    pub position_bundle_owner: Signer<'info>,

    /// CHECK: receives the reclaimed rent
    #[account(mut)]
    pub receiver: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitializePositionBundleParams {
    pub funder: Pubkey,
    pub owner: Pubkey,
    pub position_bundle_mint: Pubkey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletePositionBundleParams {
    pub owner: Pubkey,
    pub receiver: Pubkey,
    pub position_bundle_mint: Pubkey,
}

/// `(position_bundle, position_bundle_token_account)` of a bundle mint held by `owner`
fn bundle_addresses(program_id: &Pubkey, owner: &Pubkey, mint: &Pubkey) -> (Pubkey, Pubkey) {
    (
        crate::pda::position_bundle(program_id, mint).0,
        crate::pda::associated_token_address(owner, mint),
    )
}

pub fn initialize_position_bundle_ix(
    program_id: &Pubkey,
    params: &InitializePositionBundleParams,
) -> Instruction {
    let (position_bundle, token_account) =
        bundle_addresses(program_id, &params.owner, &params.position_bundle_mint);

    Instruction {
        program_id: *program_id,
        accounts: crate::accounts::InitializePositionBundle {
            position_bundle,
            position_bundle_mint: params.position_bundle_mint,
            position_bundle_token_account: token_account,
            position_bundle_owner: params.owner,
            funder: params.funder,
            token_program: anchor_spl::token::ID,
            system_program: anchor_lang::system_program::ID,
            rent: anchor_lang::solana_program::sysvar::rent::ID,
            associated_token_program: anchor_spl::associated_token::ID,
        }
        .to_account_metas(None),
        data: crate::instruction::InitializePositionBundle {}.data(),
    }
}

pub fn initialize_position_bundle_with_metadata_ix(
    program_id: &Pubkey,
    params: &InitializePositionBundleParams,
    metadata_update_auth: &Pubkey,
) -> Instruction {
    let (position_bundle, token_account) =
        bundle_addresses(program_id, &params.owner, &params.position_bundle_mint);
    let (position_bundle_metadata, _) =
        crate::pda::position_bundle_metadata(&params.position_bundle_mint);

    Instruction {
        program_id: *program_id,
        accounts: crate::accounts::InitializePositionBundleWithMetadata {
            position_bundle,
            position_bundle_mint: params.position_bundle_mint,
            position_bundle_metadata,
            position_bundle_token_account: token_account,
            position_bundle_owner: params.owner,
            funder: params.funder,
            metadata_update_auth: *metadata_update_auth,
            token_program: anchor_spl::token::ID,
            system_program: anchor_lang::system_program::ID,
            rent: anchor_lang::solana_program::sysvar::rent::ID,
            associated_token_program: anchor_spl::associated_token::ID,
            metadata_program: crate::constants::METADATA_PROGRAM_ID,
        }
        .to_account_metas(None),
        data: crate::instruction::InitializePositionBundleWithMetadata {}.data(),
    }
}

pub fn delete_position_bundle_ix(program_id: &Pubkey, params: &DeletePositionBundleParams) -> Instruction {
    let (position_bundle, token_account) =
        bundle_addresses(program_id, &params.owner, &params.position_bundle_mint);

    Instruction {
        program_id: *program_id,
        accounts: crate::accounts::DeletePositionBundle {
            position_bundle,
            position_bundle_mint: params.position_bundle_mint,
            position_bundle_token_account: token_account,
            position_bundle_owner: params.owner,
            receiver: params.receiver,
            token_program: anchor_spl::token::ID,
        }
        .to_account_metas(None),
        data: crate::instruction::DeletePositionBundle {}.data(),
    }
}
