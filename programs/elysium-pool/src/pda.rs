//! Program derived addresses of Elysium Pools accounts
//!
//! Each function returns `(address, bump)` as produced by `find_program_address`.
//! `tick_array_for_tick` fails when no tick array can hold the tick.

use anchor_lang::prelude::*;

use crate::constants::{seeds, MAX_SWAP_TICK_ARRAYS, METADATA_PROGRAM_ID};
use crate::errors::{ClientError, ClientResult};
use crate::utils::tick::tick_array_start_index;

pub fn fee_tier(program_id: &Pubkey, pools_config: &Pubkey, tick_spacing: u16) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[seeds::FEE_TIER_SEED, pools_config.as_ref(), &tick_spacing.to_le_bytes()],
        program_id,
    )
}

pub fn pool(
    program_id: &Pubkey,
    pools_config: &Pubkey,
    token_mint_a: &Pubkey,
    token_mint_b: &Pubkey,
    tick_spacing: u16,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            seeds::POOL_SEED,
            pools_config.as_ref(),
            token_mint_a.as_ref(),
            token_mint_b.as_ref(),
            &tick_spacing.to_le_bytes(),
        ],
        program_id,
    )
}

pub fn position(program_id: &Pubkey, position_mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[seeds::POSITION_SEED, position_mint.as_ref()], program_id)
}

/// Token metadata account of any NFT mint; owned by the metadata program
pub fn metadata(mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[seeds::METADATA_SEED, METADATA_PROGRAM_ID.as_ref(), mint.as_ref()],
        &METADATA_PROGRAM_ID,
    )
}

pub fn position_metadata(position_mint: &Pubkey) -> (Pubkey, u8) {
    metadata(position_mint)
}

pub fn position_bundle_metadata(position_bundle_mint: &Pubkey) -> (Pubkey, u8) {
    metadata(position_bundle_mint)
}

/// Tick array seeds use the decimal string of the start index, not its bytes
pub fn tick_array(program_id: &Pubkey, pool: &Pubkey, start_tick_index: i32) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            seeds::TICK_ARRAY_SEED,
            pool.as_ref(),
            start_tick_index.to_string().as_bytes(),
        ],
        program_id,
    )
}

/// Tick array holding `tick_index`
pub fn tick_array_for_tick(
    program_id: &Pubkey,
    pool: &Pubkey,
    tick_index: i32,
    tick_spacing: u16,
) -> ClientResult<(Pubkey, u8)> {
    let start = crate::state::TickArray::get_start_tick_index(tick_index, tick_spacing)
        .ok_or(ClientError::TickArrayOutOfBounds { tick_index, tick_spacing })?;
    Ok(tick_array(program_id, pool, start))
}

/// Tick arrays a swap starting at `tick_current_index` would traverse, in traversal order.
/// Walks up to MAX_SWAP_TICK_ARRAYS arrays in the swap direction and stops at the tick bounds.
/// A b-to-a swap starts one tick spacing up, the price may sit exactly on an array boundary.
pub fn swap_tick_array_addresses(
    program_id: &Pubkey,
    pool: &Pubkey,
    tick_current_index: i32,
    tick_spacing: u16,
    a_to_b: bool,
) -> Vec<Pubkey> {
    let (start_tick, step) = if a_to_b {
        (tick_current_index, -1)
    } else {
        (tick_current_index + tick_spacing as i32, 1)
    };
    (0..MAX_SWAP_TICK_ARRAYS as i32)
        .map_while(|i| tick_array_start_index(start_tick, tick_spacing, i * step))
        .map(|start| tick_array(program_id, pool, start).0)
        .collect()
}

pub fn oracle(program_id: &Pubkey, pool: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[seeds::ORACLE_SEED, pool.as_ref()], program_id)
}

pub fn position_bundle(program_id: &Pubkey, position_bundle_mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[seeds::POSITION_BUNDLE_SEED, position_bundle_mint.as_ref()],
        program_id,
    )
}

/// Bundle index seeds use the decimal string of the index
pub fn bundled_position(
    program_id: &Pubkey,
    position_bundle_mint: &Pubkey,
    bundle_index: u16,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            seeds::BUNDLED_POSITION_SEED,
            position_bundle_mint.as_ref(),
            bundle_index.to_string().as_bytes(),
        ],
        program_id,
    )
}

/// Associated token account of `owner` for `mint` under the legacy token program
pub fn associated_token_address(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    anchor_spl::associated_token::get_associated_token_address(owner, mint)
}
