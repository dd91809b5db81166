//! Decoding of raw account data into program account types

use anchor_lang::AccountDeserialize;

use crate::errors::ClientResult;

/// Decode account data, checking the 8-byte discriminator of `T`
pub fn parse_account<T: AccountDeserialize>(data: &[u8]) -> ClientResult<T> {
    let mut buf = data;
    Ok(T::try_deserialize(&mut buf)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ClientError;
    use crate::state::{ElysiumPool, FeeTier, Position};
    use anchor_lang::prelude::Pubkey;
    use anchor_lang::AccountSerialize;

    #[test]
    fn test_parse_position() {
        let position = Position {
            pool: Pubkey::new_unique(),
            position_mint: Pubkey::new_unique(),
            liquidity: 1_000_000,
            tick_lower_index: -128,
            tick_upper_index: 128,
            fee_owed_a: 42,
            ..Default::default()
        };
        let mut data = Vec::new();
        position.try_serialize(&mut data).unwrap();

        let parsed: Position = parse_account(&data).unwrap();
        assert_eq!(parsed, position);
    }

    #[test]
    fn test_parse_rejects_wrong_discriminator() {
        let mut data = Vec::new();
        FeeTier::default().try_serialize(&mut data).unwrap();

        let result = parse_account::<ElysiumPool>(&data);
        assert!(matches!(result, Err(ClientError::Anchor(_))));
    }

    #[test]
    fn test_parse_rejects_short_data() {
        assert!(parse_account::<FeeTier>(&[1, 2, 3]).is_err());
        assert!(parse_account::<FeeTier>(&[]).is_err());
    }
}
