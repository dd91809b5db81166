use anchor_lang::prelude::*;

use crate::constants::POSITION_BUNDLE_SIZE;

/// Position bundle - one NFT grants authority over up to 256 bundled positions
/// PDA: ["position_bundle", position_bundle_mint]
#[account]
#[derive(Default, Debug, PartialEq)]
pub struct PositionBundle {
    /// Mint of the bundle NFT
    pub position_bundle_mint: Pubkey,

    /// Bitmap of occupied bundle indexes, bit i of byte i / 8
    pub position_bitmap: [u8; 32],
}

impl PositionBundle {
    pub const LEN: usize = 8 + 32 + 32 + 64;

    pub fn is_bundle_index_occupied(&self, bundle_index: u16) -> bool {
        if bundle_index >= POSITION_BUNDLE_SIZE {
            return false;
        }
        let byte_index = (bundle_index / 8) as usize;
        let bit_index = bundle_index % 8;
        (self.position_bitmap[byte_index] >> bit_index) & 1 == 1
    }

    pub fn is_bundle_index_unoccupied(&self, bundle_index: u16) -> bool {
        bundle_index < POSITION_BUNDLE_SIZE && !self.is_bundle_index_occupied(bundle_index)
    }

    /// Lowest free bundle index, if any
    pub fn find_unoccupied_bundle_index(&self) -> Option<u16> {
        (0..POSITION_BUNDLE_SIZE).find(|&i| !self.is_bundle_index_occupied(i))
    }

    pub fn occupied_bundle_indexes(&self) -> Vec<u16> {
        (0..POSITION_BUNDLE_SIZE)
            .filter(|&i| self.is_bundle_index_occupied(i))
            .collect()
    }

    /// A bundle can be deleted only once every bundled position is closed
    pub fn is_deletable(&self) -> bool {
        self.position_bitmap.iter().all(|byte| *byte == 0)
    }
}
