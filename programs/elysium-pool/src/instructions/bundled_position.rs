//! Positions opened inside a position bundle, addressed by bundle index

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::{InstructionData, ToAccountMetas};
use anchor_spl::token::TokenAccount;

use crate::constants::POSITION_BUNDLE_SIZE;
use crate::errors::{ClientError, ClientResult};
use crate::state::{ElysiumPool, Position, PositionBundle};

#[derive(Accounts)]
#[instruction(bundle_index: u16)]
pub struct OpenBundledPosition<'info> {
    /// CHECK: bundled position PDA, created by the program
    #[account(mut)]
    pub bundled_position: UncheckedAccount<'info>,

    #[account(mut)]
    pub position_bundle: Box<Account<'info, PositionBundle>>,

    pub position_bundle_token_account: Box<Account<'info, TokenAccount>>,

    pub position_bundle_authority: Signer<'info>,

    pub pool: Box<Account<'info, ElysiumPool>>,

    #[account(mut)]
    pub funder: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[derive(Accounts)]
#[instruction(bundle_index: u16)]
pub struct CloseBundledPosition<'info> {
    #[account(mut)]
    pub bundled_position: Box<Account<'info, Position>>,

    #[account(mut)]
    pub position_bundle: Box<Account<'info, PositionBundle>>,

    pub position_bundle_token_account: Box<Account<'info, TokenAccount>>,

    pub position_bundle_authority: Signer<'info>,

    /// CHECK: receives the reclaimed rent
    #[account(mut)]
    pub receiver: UncheckedAccount<'info>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenBundledPositionParams {
    pub position_bundle_mint: Pubkey,
    pub position_bundle_token_account: Pubkey,
    pub position_bundle_authority: Pubkey,
    pub pool: Pubkey,
    pub funder: Pubkey,
    pub bundle_index: u16,
    pub tick_lower_index: i32,
    pub tick_upper_index: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseBundledPositionParams {
    pub position_bundle_mint: Pubkey,
    pub position_bundle_token_account: Pubkey,
    pub position_bundle_authority: Pubkey,
    pub receiver: Pubkey,
    pub bundle_index: u16,
}

fn check_bundle_index(bundle_index: u16) -> ClientResult<()> {
    if bundle_index >= POSITION_BUNDLE_SIZE {
        return Err(ClientError::InvalidBundleIndex(bundle_index));
    }
    Ok(())
}

pub fn open_bundled_position_ix(
    program_id: &Pubkey,
    params: &OpenBundledPositionParams,
) -> ClientResult<Instruction> {
    check_bundle_index(params.bundle_index)?;
    let mint = &params.position_bundle_mint;

    Ok(Instruction {
        program_id: *program_id,
        accounts: crate::accounts::OpenBundledPosition {
            bundled_position: crate::pda::bundled_position(program_id, mint, params.bundle_index).0,
            position_bundle: crate::pda::position_bundle(program_id, mint).0,
            position_bundle_token_account: params.position_bundle_token_account,
            position_bundle_authority: params.position_bundle_authority,
            pool: params.pool,
            funder: params.funder,
            system_program: anchor_lang::system_program::ID,
            rent: anchor_lang::solana_program::sysvar::rent::ID,
        }
        .to_account_metas(None),
        data: crate::instruction::OpenBundledPosition {
            bundle_index: params.bundle_index,
            tick_lower_index: params.tick_lower_index,
            tick_upper_index: params.tick_upper_index,
        }
        .data(),
    })
}

pub fn close_bundled_position_ix(
    program_id: &Pubkey,
    params: &CloseBundledPositionParams,
) -> ClientResult<Instruction> {
    check_bundle_index(params.bundle_index)?;
    let mint = &params.position_bundle_mint;

    Ok(Instruction {
        program_id: *program_id,
        accounts: crate::accounts::CloseBundledPosition {
            bundled_position: crate::pda::bundled_position(program_id, mint, params.bundle_index).0,
            position_bundle: crate::pda::position_bundle(program_id, mint).0,
            position_bundle_token_account: params.position_bundle_token_account,
            position_bundle_authority: params.position_bundle_authority,
            receiver: params.receiver,
        }
        .to_account_metas(None),
        data: crate::instruction::CloseBundledPosition {
            bundle_index: params.bundle_index,
        }
        .data(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instructions::test_utils::sighash;

    fn open_params(bundle_index: u16) -> OpenBundledPositionParams {
        OpenBundledPositionParams {
            position_bundle_mint: Pubkey::new_unique(),
            position_bundle_token_account: Pubkey::new_unique(),
            position_bundle_authority: Pubkey::new_unique(),
            pool: Pubkey::new_unique(),
            funder: Pubkey::new_unique(),
            bundle_index,
            tick_lower_index: -64,
            tick_upper_index: 64,
        }
    }

    #[test]
    fn test_open_bundled_position_ix() {
        let params = open_params(255);
        let ix = open_bundled_position_ix(&crate::ID, &params).unwrap();

        assert_eq!(ix.accounts.len(), 8);
        assert_eq!(
            ix.accounts[0].pubkey,
            crate::pda::bundled_position(&crate::ID, &params.position_bundle_mint, 255).0
        );
        assert_eq!(
            ix.accounts[1].pubkey,
            crate::pda::position_bundle(&crate::ID, &params.position_bundle_mint).0
        );
        assert!(ix.accounts[3].is_signer && !ix.accounts[3].is_writable);
        assert!(ix.accounts[5].is_signer && ix.accounts[5].is_writable);

        assert_eq!(ix.data[..8], sighash("open_bundled_position"));
        assert_eq!(ix.data[8..10], 255u16.to_le_bytes());
        assert_eq!(ix.data[10..14], (-64i32).to_le_bytes());
        assert_eq!(ix.data[14..], 64i32.to_le_bytes());
    }

    #[test]
    fn test_bundle_index_out_of_range() {
        assert!(matches!(
            open_bundled_position_ix(&crate::ID, &open_params(256)),
            Err(ClientError::InvalidBundleIndex(256))
        ));

        let close = CloseBundledPositionParams {
            position_bundle_mint: Pubkey::new_unique(),
            position_bundle_token_account: Pubkey::new_unique(),
            position_bundle_authority: Pubkey::new_unique(),
            receiver: Pubkey::new_unique(),
            bundle_index: u16::MAX,
        };
        assert!(close_bundled_position_ix(&crate::ID, &close).is_err());

        let ix = close_bundled_position_ix(&crate::ID, &CloseBundledPositionParams { bundle_index: 0, ..close }).unwrap();
        assert_eq!(ix.accounts.len(), 5);
        assert_eq!(ix.data[..8], sighash("close_bundled_position"));
        assert_eq!(ix.data[8..], 0u16.to_le_bytes());
    }
}
