use anchor_lang::prelude::*;

/// Global protocol configuration shared by every pool created under it
/// Created by `initialize_config` on a fresh keypair account
#[account]
#[derive(Default, Debug, PartialEq)]
pub struct ElysiumPoolsConfig {
    /// Authority allowed to create fee tiers and change fee rates
    pub fee_authority: Pubkey,

    /// Authority allowed to withdraw accumulated protocol fees
    pub collect_protocol_fees_authority: Pubkey,

    /// Authority that may reassign any pool's reward authorities
    pub reward_emissions_super_authority: Pubkey,

    /// Protocol fee rate applied to new pools, in basis points of the pool fee
    pub default_protocol_fee_rate: u16,
}

impl ElysiumPoolsConfig {
    pub const LEN: usize = 8 +  // discriminator
        32 +                     // fee_authority
        32 +                     // collect_protocol_fees_authority
        32 +                     // reward_emissions_super_authority
        2;                       // default_protocol_fee_rate

    pub fn is_fee_authority(&self, signer: &Pubkey) -> bool {
        self.fee_authority == *signer
    }

    pub fn is_collect_protocol_fees_authority(&self, signer: &Pubkey) -> bool {
        self.collect_protocol_fees_authority == *signer
    }

    pub fn is_reward_emissions_super_authority(&self, signer: &Pubkey) -> bool {
        self.reward_emissions_super_authority == *signer
    }
}
