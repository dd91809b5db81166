use anchor_lang::prelude::*;

use crate::constants::NUM_REWARDS;

/// Pool state - the core AMM state for a token pair
/// PDA: ["pool", pools_config, token_mint_a, token_mint_b, tick_spacing.to_le_bytes()]
#[account]
#[derive(Default, Debug, PartialEq)]
pub struct ElysiumPool {
    /// The config this pool belongs to
    pub pools_config: Pubkey,                     // 32

    /// Bump seed for PDA derivation
    pub pool_bump: [u8; 1],                       // 1

    /// Tick spacing for this pool
    pub tick_spacing: u16,                        // 2

    /// Tick spacing as used in the PDA seeds
    pub tick_spacing_seed: [u8; 2],               // 2

    /// Fee rate in hundredths of a basis point
    pub fee_rate: u16,                            // 2

    /// Share of the fee taken by the protocol, in basis points
    pub protocol_fee_rate: u16,                   // 2

    /// Liquidity currently in range
    pub liquidity: u128,                          // 16

    /// Current sqrt price as Q64.64 fixed point
    pub sqrt_price: u128,                         // 16

    /// Current tick index
    pub tick_current_index: i32,                  // 4

    pub protocol_fee_owed_a: u64,                 // 8
    pub protocol_fee_owed_b: u64,                 // 8

    /// Token A mint (must be < token B mint in byte order)
    pub token_mint_a: Pubkey,                     // 32
    pub token_vault_a: Pubkey,                    // 32

    /// Global fee growth for token A (Q64.64)
    pub fee_growth_global_a: u128,                // 16

    pub token_mint_b: Pubkey,                     // 32
    pub token_vault_b: Pubkey,                    // 32

    /// Global fee growth for token B (Q64.64)
    pub fee_growth_global_b: u128,                // 16

    /// Unix timestamp of the last reward growth update
    pub reward_last_updated_timestamp: u64,       // 8

    pub reward_infos: [ElysiumPoolRewardInfo; NUM_REWARDS], // 384
}

/// PDA bump passed to initialize_pool
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ElysiumPoolBumps {
    pub pool_bump: u8,
}

/// A single reward emission slot of a pool
#[derive(Copy, Clone, AnchorSerialize, AnchorDeserialize, Default, Debug, PartialEq)]
pub struct ElysiumPoolRewardInfo {
    /// Reward token mint
    pub mint: Pubkey,

    /// Vault holding the reward tokens
    pub vault: Pubkey,

    /// Authority allowed to set emissions for this slot
    pub authority: Pubkey,

    /// Reward tokens emitted per second (Q64.64)
    pub emissions_per_second_x64: u128,

    /// Reward growth per unit of liquidity since the slot was created (Q64.64)
    pub growth_global_x64: u128,
}

impl ElysiumPoolRewardInfo {
    pub const LEN: usize = 32 + 32 + 32 + 16 + 16;

    /// A slot is live once both its mint and vault have been assigned.
    /// The authority alone is not enough, it is set for every slot at pool creation.
    pub fn initialized(&self) -> bool {
        self.mint != Pubkey::default() && self.vault != Pubkey::default()
    }
}

/// Which side of the pair a mint is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    TokenA,
    TokenB,
}

impl ElysiumPool {
    pub const LEN: usize = 8 + 261 + NUM_REWARDS * ElysiumPoolRewardInfo::LEN;

    /// Reward slots that have been initialized, paired with their slot index
    pub fn initialized_reward_infos(&self) -> impl Iterator<Item = (usize, &ElysiumPoolRewardInfo)> {
        self.reward_infos
            .iter()
            .enumerate()
            .filter(|(_, info)| info.initialized())
    }

    /// Mints of all initialized reward slots
    pub fn reward_mints(&self) -> Vec<Pubkey> {
        self.initialized_reward_infos()
            .map(|(_, info)| info.mint)
            .collect()
    }

    pub fn token_type(&self, mint: &Pubkey) -> Option<TokenType> {
        if self.token_mint_a == *mint {
            Some(TokenType::TokenA)
        } else if self.token_mint_b == *mint {
            Some(TokenType::TokenB)
        } else {
            None
        }
    }

    pub fn token_vault(&self, token_type: TokenType) -> Pubkey {
        match token_type {
            TokenType::TokenA => self.token_vault_a,
            TokenType::TokenB => self.token_vault_b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_len_matches_serialized_size() {
        let pool = ElysiumPool::default();
        let mut data = Vec::new();
        pool.try_serialize(&mut data).unwrap();
        assert_eq!(data.len(), ElysiumPool::LEN);
        assert_eq!(ElysiumPool::LEN, 653);
    }

    #[test]
    fn test_reward_initialized_requires_mint_and_vault() {
        let authority_only = ElysiumPoolRewardInfo {
            authority: Pubkey::new_unique(),
            ..Default::default()
        };
        assert!(!authority_only.initialized());

        let mint_only = ElysiumPoolRewardInfo {
            mint: Pubkey::new_unique(),
            ..authority_only
        };
        assert!(!mint_only.initialized());

        let live = ElysiumPoolRewardInfo {
            vault: Pubkey::new_unique(),
            ..mint_only
        };
        assert!(live.initialized());
    }

    #[test]
    fn test_initialized_reward_infos() {
        let mut pool = ElysiumPool::default();
        let mint = Pubkey::new_unique();
        pool.reward_infos[2] = ElysiumPoolRewardInfo {
            mint,
            vault: Pubkey::new_unique(),
            ..Default::default()
        };

        let indexes: Vec<usize> = pool.initialized_reward_infos().map(|(i, _)| i).collect();
        assert_eq!(indexes, vec![2]);
        assert_eq!(pool.reward_mints(), vec![mint]);
    }

    #[test]
    fn test_token_type() {
        let pool = ElysiumPool {
            token_mint_a: Pubkey::new_unique(),
            token_mint_b: Pubkey::new_unique(),
            ..Default::default()
        };
        assert_eq!(pool.token_type(&pool.token_mint_a), Some(TokenType::TokenA));
        assert_eq!(pool.token_type(&pool.token_mint_b), Some(TokenType::TokenB));
        assert_eq!(pool.token_type(&Pubkey::new_unique()), None);
    }
}
