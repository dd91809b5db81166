use anchor_lang::prelude::*;

use crate::constants::NUM_REWARDS;

/// Liquidity position - an LP's concentrated liquidity in a single pool range
/// PDA: ["position", position_mint]
#[account]
#[derive(Default, Debug, PartialEq)]
pub struct Position {
    /// The pool this position belongs to
    pub pool: Pubkey,                             // 32

    /// Mint of the NFT that grants authority over this position
    pub position_mint: Pubkey,                    // 32

    /// Amount of liquidity in this position
    pub liquidity: u128,                          // 16

    /// Lower tick of the position range
    pub tick_lower_index: i32,                    // 4

    /// Upper tick of the position range
    pub tick_upper_index: i32,                    // 4

    /// Fee growth inside the range at the last update (token A, Q64.64)
    pub fee_growth_checkpoint_a: u128,            // 16

    /// Uncollected fees owed to the position (token A)
    pub fee_owed_a: u64,                          // 8

    /// Fee growth inside the range at the last update (token B, Q64.64)
    pub fee_growth_checkpoint_b: u128,            // 16

    /// Uncollected fees owed to the position (token B)
    pub fee_owed_b: u64,                          // 8

    pub reward_infos: [PositionRewardInfo; NUM_REWARDS], // 72
}

/// PDA bumps passed to open_position
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpenPositionBumps {
    pub position_bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpenPositionWithMetadataBumps {
    pub position_bump: u8,
    pub metadata_bump: u8,
}

/// Per reward slot accounting of a position
#[derive(Copy, Clone, AnchorSerialize, AnchorDeserialize, Default, Debug, PartialEq)]
pub struct PositionRewardInfo {
    /// Reward growth inside the range at the last update (Q64.64)
    pub growth_inside_checkpoint: u128,

    /// Uncollected reward tokens
    pub amount_owed: u64,
}

/// Where the pool price sits relative to a position's range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionStatus {
    BelowRange,
    InRange,
    AboveRange,
}

impl Position {
    pub const LEN: usize = 8 + 136 + NUM_REWARDS * 24;

    /// Check if position is empty (no liquidity, no owed fees or rewards)
    pub fn is_empty(&self) -> bool {
        self.liquidity == 0
            && self.fee_owed_a == 0
            && self.fee_owed_b == 0
            && self.reward_infos.iter().all(|r| r.amount_owed == 0)
    }

    pub fn has_liquidity(&self) -> bool {
        self.liquidity > 0
    }

    /// Lower bound inclusive, upper bound exclusive
    pub fn is_position_in_range(&self, tick_current_index: i32) -> bool {
        self.tick_lower_index <= tick_current_index && tick_current_index < self.tick_upper_index
    }

    pub fn status(&self, tick_current_index: i32) -> PositionStatus {
        if tick_current_index < self.tick_lower_index {
            PositionStatus::BelowRange
        } else if tick_current_index < self.tick_upper_index {
            PositionStatus::InRange
        } else {
            PositionStatus::AboveRange
        }
    }
}
