use std::collections::HashMap;

use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::instruction::Instruction;
use tracing::debug;

use super::{pack_instruction_groups, TransactionPayload};
use crate::context::ElysiumContext;
use crate::errors::{ClientError, ClientResult};
use crate::instructions::{
    collect_fees_ix, collect_reward_ix, update_fees_and_rewards_ix, CollectFeesParams,
    CollectRewardParams, UpdateFeesAndRewardsParams,
};
use crate::state::{ElysiumPool, Position};
use crate::utils::token_account_for;

/// Wallets involved in collecting; unset keys default to the context wallet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectAllParams {
    /// Owner of the destination token accounts
    pub receiver: Option<Pubkey>,
    /// Holder of the position NFTs
    pub position_owner: Option<Pubkey>,
    /// Signer allowed to operate the positions
    pub position_authority: Option<Pubkey>,
    /// Fee payer of the transactions
    pub payer: Option<Pubkey>,
    /// Destination token account per mint, overriding the receiver's ATA
    pub token_accounts: HashMap<Pubkey, Pubkey>,
}

/// Wallets and token accounts used when operating a position
#[derive(Debug, Clone, Copy)]
pub struct PositionKeys<'a> {
    /// Owner of the token accounts that receive or fund tokens
    pub receiver: Pubkey,
    pub position_owner: Pubkey,
    pub position_authority: Pubkey,
    /// Token account per mint, overriding the receiver's ATA
    pub token_accounts: &'a HashMap<Pubkey, Pubkey>,
}

impl<'a> PositionKeys<'a> {
    /// Every role played by `wallet`
    pub fn for_wallet(wallet: Pubkey, token_accounts: &'a HashMap<Pubkey, Pubkey>) -> Self {
        Self {
            receiver: wallet,
            position_owner: wallet,
            position_authority: wallet,
            token_accounts,
        }
    }

    pub fn position_token_account(&self, position: &Position) -> Pubkey {
        crate::pda::associated_token_address(&self.position_owner, &position.position_mint)
    }

    pub fn token_account(&self, mint: &Pubkey) -> Pubkey {
        token_account_for(&self.receiver, mint, self.token_accounts)
    }
}

/// Checkpoint owed fees and rewards; the program rejects this without liquidity
pub fn update_fees_and_rewards_for_position(
    program_id: &Pubkey,
    position_address: &Pubkey,
    position: &Position,
    pool: &ElysiumPool,
) -> ClientResult<Instruction> {
    let tick_array = |tick_index| {
        crate::pda::tick_array_for_tick(program_id, &position.pool, tick_index, pool.tick_spacing)
            .map(|(address, _)| address)
    };
    Ok(update_fees_and_rewards_ix(
        program_id,
        &UpdateFeesAndRewardsParams {
            pool: position.pool,
            position: *position_address,
            tick_array_lower: tick_array(position.tick_lower_index)?,
            tick_array_upper: tick_array(position.tick_upper_index)?,
        },
    ))
}

pub fn collect_fees_for_position(
    program_id: &Pubkey,
    keys: &PositionKeys,
    position_address: &Pubkey,
    position: &Position,
    pool: &ElysiumPool,
) -> Instruction {
    collect_fees_ix(
        program_id,
        &CollectFeesParams {
            pool: position.pool,
            position_authority: keys.position_authority,
            position: *position_address,
            position_token_account: keys.position_token_account(position),
            token_owner_account_a: keys.token_account(&pool.token_mint_a),
            token_vault_a: pool.token_vault_a,
            token_owner_account_b: keys.token_account(&pool.token_mint_b),
            token_vault_b: pool.token_vault_b,
        },
    )
}

/// One collect_reward per initialized reward slot of the pool
pub fn collect_rewards_for_position(
    program_id: &Pubkey,
    keys: &PositionKeys,
    position_address: &Pubkey,
    position: &Position,
    pool: &ElysiumPool,
) -> ClientResult<Vec<Instruction>> {
    pool.initialized_reward_infos()
        .map(|(index, info)| {
            collect_reward_ix(
                program_id,
                &CollectRewardParams {
                    pool: position.pool,
                    position_authority: keys.position_authority,
                    position: *position_address,
                    position_token_account: keys.position_token_account(position),
                    reward_owner_account: keys.token_account(&info.mint),
                    reward_vault: info.vault,
                    reward_index: index as u8,
                },
            )
        })
        .collect()
}

/// Update (only with liquidity), collect fees, then collect each initialized reward
pub fn collect_ixs_for_position(
    program_id: &Pubkey,
    keys: &PositionKeys,
    position_address: &Pubkey,
    position: &Position,
    pool: &ElysiumPool,
) -> ClientResult<Vec<Instruction>> {
    let mut ixs = Vec::with_capacity(2 + pool.reward_infos.len());
    if position.has_liquidity() {
        ixs.push(update_fees_and_rewards_for_position(program_id, position_address, position, pool)?);
    }
    ixs.push(collect_fees_for_position(program_id, keys, position_address, position, pool));
    ixs.extend(collect_rewards_for_position(program_id, keys, position_address, position, pool)?);
    Ok(ixs)
}

/// Transactions collecting every fee and reward of `positions`, in input order.
///
/// `pools` must hold the pool of every position. Positions are packed greedily;
/// a position whose instructions do not fit one transaction is an error.
pub fn collect_all_for_positions_txns(
    ctx: &ElysiumContext,
    params: &CollectAllParams,
    positions: &[(Pubkey, Position)],
    pools: &HashMap<Pubkey, ElysiumPool>,
) -> ClientResult<Vec<TransactionPayload>> {
    if positions.is_empty() {
        return Ok(Vec::new());
    }

    let keys = PositionKeys {
        receiver: params.receiver.unwrap_or(ctx.wallet),
        position_owner: params.position_owner.unwrap_or(ctx.wallet),
        position_authority: params.position_authority.unwrap_or(ctx.wallet),
        token_accounts: &params.token_accounts,
    };
    let payer = params.payer.unwrap_or(ctx.wallet);

    let groups = positions
        .iter()
        .map(|(address, position)| {
            let pool = pools
                .get(&position.pool)
                .ok_or(ClientError::PoolNotFound(position.pool))?;
            collect_ixs_for_position(&ctx.program_id, &keys, address, position, pool)
        })
        .collect::<ClientResult<Vec<_>>>()?;

    let txns = pack_instruction_groups(payer, groups, ctx.packet_data_size)?;
    debug!(
        positions = positions.len(),
        transactions = txns.len(),
        "built collect-all transactions"
    );
    Ok(txns)
}
