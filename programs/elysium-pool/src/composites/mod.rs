//! Multi-instruction builders that batch work into size-checked transactions

pub mod collect_all;
pub mod collect_protocol_fees;

pub use collect_all::*;
pub use collect_protocol_fees::*;

use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::solana_program::message::Message;
use tracing::debug;

use crate::constants::SIGNATURE_SIZE;
use crate::errors::{ClientError, ClientResult};

/// Unsigned legacy transaction: a fee payer and its instructions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionPayload {
    pub payer: Pubkey,
    pub instructions: Vec<Instruction>,
}

impl TransactionPayload {
    pub fn new(payer: Pubkey) -> Self {
        Self {
            payer,
            instructions: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn message(&self) -> Message {
        Message::new(&self.instructions, Some(&self.payer))
    }

    /// Bytes of the signed wire transaction
    pub fn serialized_size(&self) -> usize {
        transaction_size(&self.instructions, &self.payer)
    }

    /// Size of this transaction once `group` is appended
    fn size_with(&self, group: &[Instruction]) -> usize {
        let mut instructions = self.instructions.clone();
        instructions.extend_from_slice(group);
        transaction_size(&instructions, &self.payer)
    }
}

/// Wire size of a legacy transaction: signature count, signatures, then the message
pub fn transaction_size(instructions: &[Instruction], payer: &Pubkey) -> usize {
    let message = Message::new(instructions, Some(payer));
    let num_signatures = message.header.num_required_signatures as usize;
    short_vec_len(num_signatures) + num_signatures * SIGNATURE_SIZE + message.serialize().len()
}

/// Length of a compact-u16 encoding
fn short_vec_len(mut value: usize) -> usize {
    let mut len = 1;
    while value >= 0x80 {
        value >>= 7;
        len += 1;
    }
    len
}

/// Pack instruction groups into transactions of at most `limit` bytes, in order.
/// A group is never split across transactions.
pub fn pack_instruction_groups(
    payer: Pubkey,
    groups: impl IntoIterator<Item = Vec<Instruction>>,
    limit: usize,
) -> ClientResult<Vec<TransactionPayload>> {
    let mut txns = Vec::new();
    let mut pending = TransactionPayload::new(payer);

    for group in groups {
        if group.is_empty() {
            continue;
        }

        let size = pending.size_with(&group);
        if size <= limit {
            pending.instructions.extend(group);
            continue;
        }

        if pending.is_empty() {
            return Err(ClientError::TransactionTooLarge { size, limit });
        }

        debug!(
            instructions = pending.instructions.len(),
            size = pending.serialized_size(),
            "transaction full, starting another"
        );
        txns.push(std::mem::replace(&mut pending, TransactionPayload::new(payer)));

        let size = pending.size_with(&group);
        if size > limit {
            return Err(ClientError::TransactionTooLarge { size, limit });
        }
        pending.instructions.extend(group);
    }

    if !pending.is_empty() {
        txns.push(pending);
    }
    Ok(txns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::solana_program::instruction::AccountMeta;

    fn ix_with_accounts(n: usize) -> Instruction {
        Instruction {
            program_id: crate::ID,
            accounts: (0..n)
                .map(|_| AccountMeta::new(Pubkey::new_unique(), false))
                .collect(),
            data: vec![0; 8],
        }
    }

    #[test]
    fn test_short_vec_len() {
        assert_eq!(short_vec_len(0), 1);
        assert_eq!(short_vec_len(0x7f), 1);
        assert_eq!(short_vec_len(0x80), 2);
        assert_eq!(short_vec_len(0x3fff), 2);
        assert_eq!(short_vec_len(0x4000), 3);
    }

    #[test]
    fn test_transaction_size_of_single_instruction() {
        let payer = Pubkey::new_unique();
        let ix = ix_with_accounts(2);
        // 1 + 64 signature, header 3, keys 1 + 4 * 32, blockhash 32,
        // 1 instruction: program index 1, accounts 1 + 2, data 1 + 8
        let expected = 1 + 64 + 3 + 1 + 4 * 32 + 32 + 1 + 1 + 1 + 2 + 1 + 8;
        assert_eq!(transaction_size(&[ix], &payer), expected);
    }

    #[test]
    fn test_pack_empty_input() {
        let txns = pack_instruction_groups(Pubkey::new_unique(), Vec::<Vec<Instruction>>::new(), 1232).unwrap();
        assert!(txns.is_empty());
    }

    #[test]
    fn test_pack_splits_without_breaking_groups() {
        let payer = Pubkey::new_unique();
        let groups: Vec<Vec<Instruction>> = (0..6)
            .map(|_| vec![ix_with_accounts(4), ix_with_accounts(4)])
            .collect();

        let txns = pack_instruction_groups(payer, groups.clone(), 1232).unwrap();
        assert!(txns.len() > 1);
        for txn in &txns {
            assert!(txn.serialized_size() <= 1232);
            assert_eq!(txn.instructions.len() % 2, 0);
            assert_eq!(txn.payer, payer);
        }

        let flattened: Vec<Instruction> = txns.into_iter().flat_map(|t| t.instructions).collect();
        assert_eq!(flattened, groups.concat());
    }

    #[test]
    fn test_pack_rejects_oversized_group() {
        let payer = Pubkey::new_unique();
        let group = vec![ix_with_accounts(40)];
        let result = pack_instruction_groups(payer, vec![group], 1232);
        assert!(matches!(result, Err(ClientError::TransactionTooLarge { limit: 1232, .. })));
    }

    #[test]
    fn test_pack_rejects_oversized_group_after_flush() {
        let payer = Pubkey::new_unique();
        let groups = vec![vec![ix_with_accounts(2)], vec![ix_with_accounts(40)]];
        assert!(pack_instruction_groups(payer, groups, 1232).is_err());
    }
}
