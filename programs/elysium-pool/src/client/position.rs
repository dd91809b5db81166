use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::instruction::Instruction;
use tracing::debug;

use super::PoolSnapshot;
use crate::composites::{
    collect_fees_for_position, collect_rewards_for_position, update_fees_and_rewards_for_position,
    PositionKeys,
};
use crate::context::ElysiumContext;
use crate::errors::{ClientError, ClientResult};
use crate::instructions::{
    close_position_ix, decrease_liquidity_ix, increase_liquidity_ix, ClosePositionParams,
    DecreaseLiquidityParams, IncreaseLiquidityParams, ModifyLiquidityAccounts,
};
use crate::quotes::{
    collect_fees_quote, collect_rewards_quote, CollectFeesQuote, CollectFeesQuoteParam,
    CollectRewardsQuote, CollectRewardsQuoteParam,
};
use crate::state::{Position, PositionStatus, Tick, TickArray};

/// A position with its pool and boundary ticks, as of the moment they were fetched
#[derive(Debug, Clone, PartialEq)]
pub struct PositionSnapshot {
    pub address: Pubkey,
    pub data: Position,
    pub pool: PoolSnapshot,
    pub tick_lower: Tick,
    pub tick_upper: Tick,
}

impl PositionSnapshot {
    pub fn new(address: Pubkey, data: Position, pool: PoolSnapshot, tick_lower: Tick, tick_upper: Tick) -> Self {
        Self {
            address,
            data,
            pool,
            tick_lower,
            tick_upper,
        }
    }

    /// Pick the boundary ticks out of the arrays holding them
    pub fn from_tick_arrays(
        address: Pubkey,
        data: Position,
        pool: PoolSnapshot,
        tick_array_lower: &TickArray,
        tick_array_upper: &TickArray,
    ) -> ClientResult<Self> {
        let tick_spacing = pool.data.tick_spacing;
        let tick = |array: &TickArray, tick_index: i32| {
            array
                .get_tick(tick_index, tick_spacing)
                .copied()
                .map_err(|_| ClientError::TickNotFound {
                    tick_index,
                    start_tick_index: array.start_tick_index,
                })
        };
        let tick_lower = tick(tick_array_lower, data.tick_lower_index)?;
        let tick_upper = tick(tick_array_upper, data.tick_upper_index)?;
        Ok(Self::new(address, data, pool, tick_lower, tick_upper))
    }

    pub fn status(&self) -> PositionStatus {
        self.data.status(self.pool.data.tick_current_index)
    }

    pub fn collect_fees_quote(&self) -> CollectFeesQuote {
        collect_fees_quote(CollectFeesQuoteParam {
            pool: &self.pool.data,
            position: &self.data,
            tick_lower: &self.tick_lower,
            tick_upper: &self.tick_upper,
        })
    }

    pub fn collect_rewards_quote(&self, timestamp_in_seconds: Option<u64>) -> CollectRewardsQuote {
        collect_rewards_quote(CollectRewardsQuoteParam {
            pool: &self.pool.data,
            position: &self.data,
            tick_lower: &self.tick_lower,
            tick_upper: &self.tick_upper,
            timestamp_in_seconds,
        })
    }

    /// `(lower, upper)` tick array addresses
    pub fn tick_array_addresses(&self, program_id: &Pubkey) -> ClientResult<(Pubkey, Pubkey)> {
        let tick_array = |tick_index| {
            crate::pda::tick_array_for_tick(program_id, &self.pool.address, tick_index, self.pool.data.tick_spacing)
                .map(|(address, _)| address)
        };
        Ok((
            tick_array(self.data.tick_lower_index)?,
            tick_array(self.data.tick_upper_index)?,
        ))
    }

    fn modify_liquidity_accounts(
        &self,
        ctx: &ElysiumContext,
        keys: &PositionKeys,
    ) -> ClientResult<ModifyLiquidityAccounts> {
        let (tick_array_lower, tick_array_upper) = self.tick_array_addresses(&ctx.program_id)?;
        let pool = &self.pool.data;
        Ok(ModifyLiquidityAccounts {
            pool: self.pool.address,
            position_authority: keys.position_authority,
            position: self.address,
            position_token_account: keys.position_token_account(&self.data),
            token_owner_account_a: keys.token_account(&pool.token_mint_a),
            token_owner_account_b: keys.token_account(&pool.token_mint_b),
            token_vault_a: pool.token_vault_a,
            token_vault_b: pool.token_vault_b,
            tick_array_lower,
            tick_array_upper,
        })
    }

    /// Deposit from the receiver's token accounts
    pub fn increase_liquidity_ix(
        &self,
        ctx: &ElysiumContext,
        keys: &PositionKeys,
        liquidity_amount: u128,
        token_max_a: u64,
        token_max_b: u64,
    ) -> ClientResult<Instruction> {
        Ok(increase_liquidity_ix(
            &ctx.program_id,
            &IncreaseLiquidityParams {
                accounts: self.modify_liquidity_accounts(ctx, keys)?,
                liquidity_amount,
                token_max_a,
                token_max_b,
            },
        ))
    }

    /// Withdraw into the receiver's token accounts
    pub fn decrease_liquidity_ix(
        &self,
        ctx: &ElysiumContext,
        keys: &PositionKeys,
        liquidity_amount: u128,
        token_min_a: u64,
        token_min_b: u64,
    ) -> ClientResult<Instruction> {
        Ok(decrease_liquidity_ix(
            &ctx.program_id,
            &DecreaseLiquidityParams {
                accounts: self.modify_liquidity_accounts(ctx, keys)?,
                liquidity_amount,
                token_min_a,
                token_min_b,
            },
        ))
    }

    fn update_ix(&self, ctx: &ElysiumContext) -> ClientResult<Instruction> {
        update_fees_and_rewards_for_position(&ctx.program_id, &self.address, &self.data, &self.pool.data)
    }

    /// Collect fees, checkpointing first when `update` is set and the position has liquidity
    pub fn collect_fees_ixs(
        &self,
        ctx: &ElysiumContext,
        keys: &PositionKeys,
        update: bool,
    ) -> ClientResult<Vec<Instruction>> {
        let mut ixs = Vec::with_capacity(2);
        if update && self.data.has_liquidity() {
            ixs.push(self.update_ix(ctx)?);
        }
        ixs.push(collect_fees_for_position(
            &ctx.program_id,
            keys,
            &self.address,
            &self.data,
            &self.pool.data,
        ));
        Ok(ixs)
    }

    /// Collect every initialized reward, checkpointing first like `collect_fees_ixs`
    pub fn collect_rewards_ixs(
        &self,
        ctx: &ElysiumContext,
        keys: &PositionKeys,
        update: bool,
    ) -> ClientResult<Vec<Instruction>> {
        let mut ixs = Vec::new();
        if update && self.data.has_liquidity() {
            ixs.push(self.update_ix(ctx)?);
        }
        ixs.extend(collect_rewards_for_position(
            &ctx.program_id,
            keys,
            &self.address,
            &self.data,
            &self.pool.data,
        )?);
        Ok(ixs)
    }

    /// Withdraw all liquidity, collect everything owed and close the position.
    /// Rent goes to `keys.receiver`.
    pub fn close_position_ixs(
        &self,
        ctx: &ElysiumContext,
        keys: &PositionKeys,
        token_min_a: u64,
        token_min_b: u64,
    ) -> ClientResult<Vec<Instruction>> {
        let mut ixs = Vec::new();
        if self.data.has_liquidity() {
            ixs.push(self.update_ix(ctx)?);
            ixs.push(self.decrease_liquidity_ix(ctx, keys, self.data.liquidity, token_min_a, token_min_b)?);
        }
        ixs.extend(self.collect_fees_ixs(ctx, keys, false)?);
        ixs.extend(self.collect_rewards_ixs(ctx, keys, false)?);
        ixs.push(close_position_ix(
            &ctx.program_id,
            &ClosePositionParams {
                position_authority: keys.position_authority,
                receiver: keys.receiver,
                position: self.address,
                position_mint: self.data.position_mint,
                position_token_account: keys.position_token_account(&self.data),
            },
        ));

        debug!(position = %self.address, instructions = ixs.len(), "built close position instructions");
        Ok(ixs)
    }
}
