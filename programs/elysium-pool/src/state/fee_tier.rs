use anchor_lang::prelude::*;

use crate::constants::FEE_RATE_DENOMINATOR;

/// Fee tier configuration
/// PDA: ["fee_tier", pools_config, tick_spacing.to_le_bytes()]
#[account]
#[derive(Default, Debug, PartialEq)]
pub struct FeeTier {
    /// The config this fee tier belongs to
    pub pools_config: Pubkey,

    /// Tick spacing for pools created with this tier
    pub tick_spacing: u16,

    /// Fee rate in hundredths of a basis point (3000 = 0.3%)
    pub default_fee_rate: u16,
}

impl FeeTier {
    pub const LEN: usize = 8 +  // discriminator
        32 +                     // pools_config
        2 +                      // tick_spacing
        2;                       // default_fee_rate

    /// Fee charged on `amount` at the default rate, rounded down
    pub fn calculate_fee(&self, amount: u64) -> u64 {
        // u64 * u16 / 1e6 always fits back into u64
        ((amount as u128) * (self.default_fee_rate as u128) / FEE_RATE_DENOMINATOR as u128) as u64
    }
}
