use std::collections::BTreeSet;

use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::instruction::Instruction;
use tracing::debug;

use crate::context::ElysiumContext;
use crate::errors::{ClientError, ClientResult};
use crate::instructions::{
    initialize_tick_array_ix, open_position_ix, open_position_with_metadata_ix, swap_ix,
    InitializeTickArrayParams, OpenPositionParams, PositionAddresses,
};
use crate::parsing::parse_account;
use crate::state::{ElysiumPool, TickArray};
use crate::utils::swap::{swap_params_from_input, SwapInput};
use crate::utils::tick::is_valid_position_tick;

/// A pool account as of the moment it was fetched
#[derive(Debug, Clone, PartialEq)]
pub struct PoolSnapshot {
    pub address: Pubkey,
    pub data: ElysiumPool,
}

/// A position to open in a pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenPositionRequest {
    /// Fresh keypair address; signs the transaction
    pub position_mint: Pubkey,
    pub tick_lower_index: i32,
    pub tick_upper_index: i32,
    /// Receiver of the position NFT, defaults to the context wallet
    pub owner: Option<Pubkey>,
    /// Pays rent, defaults to the context wallet
    pub funder: Option<Pubkey>,
    /// Create Metaplex metadata with this update authority
    pub metadata_update_auth: Option<Pubkey>,
}

impl PoolSnapshot {
    pub fn new(address: Pubkey, data: ElysiumPool) -> Self {
        Self { address, data }
    }

    pub fn from_account_data(address: Pubkey, data: &[u8]) -> ClientResult<Self> {
        Ok(Self::new(address, parse_account(data)?))
    }

    /// Decimal-adjusted price of token A in token B
    pub fn price(&self, decimals_a: u8, decimals_b: u8) -> f64 {
        crate::utils::sqrt_price_to_price(self.data.sqrt_price, decimals_a, decimals_b)
    }

    pub fn reward_mints(&self) -> Vec<Pubkey> {
        self.data.reward_mints()
    }

    /// Open a position over `[tick_lower_index, tick_upper_index)`.
    /// Both ticks must be in bounds and multiples of the pool's tick spacing.
    pub fn open_position_ix(
        &self,
        ctx: &ElysiumContext,
        request: &OpenPositionRequest,
    ) -> ClientResult<(Instruction, PositionAddresses)> {
        let tick_spacing = self.data.tick_spacing;
        if !is_valid_position_tick(request.tick_lower_index, tick_spacing)
            || !is_valid_position_tick(request.tick_upper_index, tick_spacing)
            || request.tick_lower_index >= request.tick_upper_index
        {
            return Err(ClientError::InvalidTickRange {
                tick_lower_index: request.tick_lower_index,
                tick_upper_index: request.tick_upper_index,
                tick_spacing,
            });
        }

        let params = OpenPositionParams {
            funder: request.funder.unwrap_or(ctx.wallet),
            owner: request.owner.unwrap_or(ctx.wallet),
            position_mint: request.position_mint,
            pool: self.address,
            tick_lower_index: request.tick_lower_index,
            tick_upper_index: request.tick_upper_index,
        };
        let ix = match request.metadata_update_auth {
            Some(update_auth) => open_position_with_metadata_ix(&ctx.program_id, &params, &update_auth),
            None => open_position_ix(&ctx.program_id, &params),
        };
        Ok((ix, params.addresses(&ctx.program_id)))
    }

    /// Initialize the tick arrays holding `tick_indexes`, one per distinct array.
    /// Accounts that already exist make the program reject the instruction.
    pub fn initialize_tick_array_ixs(
        &self,
        ctx: &ElysiumContext,
        funder: Pubkey,
        tick_indexes: &[i32],
    ) -> ClientResult<Vec<Instruction>> {
        let tick_spacing = self.data.tick_spacing;
        let starts = tick_indexes
            .iter()
            .map(|&tick_index| {
                TickArray::get_start_tick_index(tick_index, tick_spacing)
                    .ok_or(ClientError::TickArrayOutOfBounds { tick_index, tick_spacing })
            })
            .collect::<ClientResult<BTreeSet<i32>>>()?;
        debug!(pool = %self.address, arrays = starts.len(), "initializing tick arrays");

        Ok(starts
            .into_iter()
            .map(|start_tick_index| {
                initialize_tick_array_ix(
                    &ctx.program_id,
                    &InitializeTickArrayParams {
                        pool: self.address,
                        funder,
                        start_tick_index,
                    },
                )
            })
            .collect())
    }

    /// Swap signed by the context wallet
    pub fn swap_ix(
        &self,
        ctx: &ElysiumContext,
        input: &SwapInput,
        input_token_account: Pubkey,
        output_token_account: Pubkey,
    ) -> ClientResult<Instruction> {
        let params = swap_params_from_input(
            &ctx.program_id,
            &self.address,
            &self.data,
            input,
            input_token_account,
            output_token_account,
            ctx.wallet,
        )?;
        Ok(swap_ix(&ctx.program_id, &params))
    }
}
