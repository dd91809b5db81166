//! Account contexts and instruction builders, one file per instruction family.
//!
//! Each `#[derive(Accounts)]` struct defines the program interface; the
//! matching `*_ix` function assembles a ready-to-sign `Instruction`.

pub mod bundled_position;
pub mod close_position;
pub mod collect_fees;
pub mod collect_protocol_fees;
pub mod collect_reward;
pub mod initialize_config;
pub mod initialize_fee_tier;
pub mod initialize_pool;
pub mod initialize_reward;
pub mod initialize_tick_array;
pub mod modify_liquidity;
pub mod open_position;
pub mod position_bundle;
pub mod set_authorities;
pub mod set_fee_rates;
pub mod swap;
pub mod two_hop_swap;
pub mod update_fees_and_rewards;

pub use bundled_position::*;
pub use close_position::*;
pub use collect_fees::*;
pub use collect_protocol_fees::*;
pub use collect_reward::*;
pub use initialize_config::*;
pub use initialize_fee_tier::*;
pub use initialize_pool::*;
pub use initialize_reward::*;
pub use initialize_tick_array::*;
pub use modify_liquidity::*;
pub use open_position::*;
pub use position_bundle::*;
pub use set_authorities::*;
pub use set_fee_rates::*;
pub use swap::*;
pub use two_hop_swap::*;
pub use update_fees_and_rewards::*;

use crate::constants::NUM_REWARDS;
use crate::errors::{ClientError, ClientResult};

pub(crate) fn check_reward_index(reward_index: u8) -> ClientResult<()> {
    if reward_index as usize >= NUM_REWARDS {
        return Err(ClientError::InvalidRewardIndex(reward_index));
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_utils {
    /// Anchor instruction discriminator
    pub fn sighash(name: &str) -> [u8; 8] {
        let hash = anchor_lang::solana_program::hash::hash(format!("global:{name}").as_bytes());
        let mut out = [0u8; 8];
        out.copy_from_slice(&hash.to_bytes()[..8]);
        out
    }
}
