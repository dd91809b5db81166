use std::collections::HashMap;

use anchor_lang::prelude::Pubkey;
use tracing::{debug, warn};

use super::TransactionPayload;
use crate::context::ElysiumContext;
use crate::errors::{ClientError, ClientResult};
use crate::instructions::{collect_protocol_fees_ix, CollectProtocolFeesParams};
use crate::state::{ElysiumPool, ElysiumPoolsConfig};
use crate::utils::token_account_for;

/// One transaction collecting the protocol fees of every pool in `pool_addresses`.
///
/// The context wallet signs as the collect protocol fees authority and receives
/// the tokens, into its ATAs unless `token_accounts` maps the mint elsewhere.
pub fn collect_protocol_fees_txn(
    ctx: &ElysiumContext,
    pool_addresses: &[Pubkey],
    pools: &HashMap<Pubkey, ElysiumPool>,
    configs: &HashMap<Pubkey, ElysiumPoolsConfig>,
    token_accounts: &HashMap<Pubkey, Pubkey>,
) -> ClientResult<TransactionPayload> {
    let mut txn = TransactionPayload::new(ctx.wallet);

    for pool_address in pool_addresses {
        let pool = pools
            .get(pool_address)
            .ok_or(ClientError::PoolNotFound(*pool_address))?;
        let config = configs
            .get(&pool.pools_config)
            .ok_or(ClientError::ConfigNotFound(pool.pools_config))?;

        if !config.is_collect_protocol_fees_authority(&ctx.wallet) {
            warn!(wallet = %ctx.wallet, config = %pool.pools_config, "wallet cannot collect protocol fees");
            return Err(ClientError::UnauthorizedAuthority {
                wallet: ctx.wallet,
                config: pool.pools_config,
            });
        }

        txn.instructions.push(collect_protocol_fees_ix(
            &ctx.program_id,
            &CollectProtocolFeesParams {
                pools_config: pool.pools_config,
                pool: *pool_address,
                collect_protocol_fees_authority: config.collect_protocol_fees_authority,
                token_vault_a: pool.token_vault_a,
                token_vault_b: pool.token_vault_b,
                token_destination_a: token_account_for(&ctx.wallet, &pool.token_mint_a, token_accounts),
                token_destination_b: token_account_for(&ctx.wallet, &pool.token_mint_b, token_accounts),
            },
        ));
    }

    let size = txn.serialized_size();
    if size > ctx.packet_data_size {
        return Err(ClientError::TransactionTooLarge {
            size,
            limit: ctx.packet_data_size,
        });
    }

    debug!(pools = pool_addresses.len(), size, "built collect protocol fees transaction");
    Ok(txn)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        ctx: ElysiumContext,
        pools: HashMap<Pubkey, ElysiumPool>,
        configs: HashMap<Pubkey, ElysiumPoolsConfig>,
        config_address: Pubkey,
    }

    fn fixture(num_pools: usize) -> Fixture {
        let wallet = Pubkey::new_unique();
        let config_address = Pubkey::new_unique();
        let configs = HashMap::from([(
            config_address,
            ElysiumPoolsConfig {
                collect_protocol_fees_authority: wallet,
                ..Default::default()
            },
        )]);
        let pools = (0..num_pools)
            .map(|_| {
                (
                    Pubkey::new_unique(),
                    ElysiumPool {
                        pools_config: config_address,
                        token_mint_a: Pubkey::new_unique(),
                        token_vault_a: Pubkey::new_unique(),
                        token_mint_b: Pubkey::new_unique(),
                        token_vault_b: Pubkey::new_unique(),
                        ..Default::default()
                    },
                )
            })
            .collect();
        Fixture {
            ctx: ElysiumContext::new(wallet),
            pools,
            configs,
            config_address,
        }
    }

    #[test]
    fn test_one_instruction_per_pool() {
        let f = fixture(2);
        let addresses: Vec<Pubkey> = f.pools.keys().copied().collect();
        let txn = collect_protocol_fees_txn(&f.ctx, &addresses, &f.pools, &f.configs, &HashMap::new()).unwrap();

        assert_eq!(txn.instructions.len(), 2);
        assert_eq!(txn.payer, f.ctx.wallet);
        let ix = &txn.instructions[0];
        let pool = &f.pools[&addresses[0]];
        assert_eq!(ix.accounts[0].pubkey, f.config_address);
        assert_eq!(ix.accounts[1].pubkey, addresses[0]);
        assert!(ix.accounts[2].is_signer);
        assert_eq!(
            ix.accounts[5].pubkey,
            crate::pda::associated_token_address(&f.ctx.wallet, &pool.token_mint_a)
        );
    }

    #[test]
    fn test_rejects_wrong_authority() {
        let f = fixture(1);
        let addresses: Vec<Pubkey> = f.pools.keys().copied().collect();
        let other = ElysiumContext::new(Pubkey::new_unique());
        let result = collect_protocol_fees_txn(&other, &addresses, &f.pools, &f.configs, &HashMap::new());
        assert!(matches!(result, Err(ClientError::UnauthorizedAuthority { .. })));
    }

    #[test]
    fn test_missing_pool_or_config() {
        let f = fixture(1);
        let missing = Pubkey::new_unique();
        assert!(matches!(
            collect_protocol_fees_txn(&f.ctx, &[missing], &f.pools, &f.configs, &HashMap::new()),
            Err(ClientError::PoolNotFound(p)) if p == missing
        ));

        let addresses: Vec<Pubkey> = f.pools.keys().copied().collect();
        assert!(matches!(
            collect_protocol_fees_txn(&f.ctx, &addresses, &f.pools, &HashMap::new(), &HashMap::new()),
            Err(ClientError::ConfigNotFound(c)) if c == f.config_address
        ));
    }

    #[test]
    fn test_too_many_pools_for_one_transaction() {
        let f = fixture(6);
        let addresses: Vec<Pubkey> = f.pools.keys().copied().collect();
        let result = collect_protocol_fees_txn(&f.ctx, &addresses, &f.pools, &f.configs, &HashMap::new());
        assert!(matches!(result, Err(ClientError::TransactionTooLarge { limit: 1232, .. })));
    }
}
