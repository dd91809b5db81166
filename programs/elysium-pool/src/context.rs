//! Runtime settings shared by the composite builders

use anchor_lang::prelude::Pubkey;

use crate::constants::PACKET_DATA_SIZE;

/// Program and wallet a batch of instructions is built for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElysiumContext {
    pub program_id: Pubkey,

    /// Default fee payer, receiver and authority of composite builders
    pub wallet: Pubkey,

    /// Upper bound on a serialized transaction, in bytes
    pub packet_data_size: usize,
}

impl ElysiumContext {
    /// Context for the deployed program
    pub fn new(wallet: Pubkey) -> Self {
        Self {
            program_id: crate::ID,
            wallet,
            packet_data_size: PACKET_DATA_SIZE,
        }
    }

    pub fn with_program_id(mut self, program_id: Pubkey) -> Self {
        self.program_id = program_id;
        self
    }

    pub fn with_packet_data_size(mut self, packet_data_size: usize) -> Self {
        self.packet_data_size = packet_data_size;
        self
    }
}
