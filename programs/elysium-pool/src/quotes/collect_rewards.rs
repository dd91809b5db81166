use crate::constants::NUM_REWARDS;
use crate::math::growth::{accumulate_owed, emissions_growth_delta};
use crate::state::{ElysiumPool, Position, Tick};

/// Snapshots needed to quote a position's uncollected rewards
#[derive(Debug, Clone, Copy)]
pub struct CollectRewardsQuoteParam<'a> {
    pub pool: &'a ElysiumPool,
    pub position: &'a Position,
    pub tick_lower: &'a Tick,
    pub tick_upper: &'a Tick,
    /// When set, emissions between the pool's last reward update and this
    /// unix timestamp are accrued before quoting
    pub timestamp_in_seconds: Option<u64>,
}

/// Total reward owed per slot; None for slots that are not initialized
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectRewardsQuote(pub [Option<u64>; NUM_REWARDS]);

impl CollectRewardsQuote {
    pub fn get(&self, reward_index: usize) -> Option<u64> {
        self.0.get(reward_index).copied().flatten()
    }
}

/// Global reward growth of every slot, advanced to `timestamp_in_seconds` if given
pub fn reward_growths_global(pool: &ElysiumPool, timestamp_in_seconds: Option<u64>) -> [u128; NUM_REWARDS] {
    let elapsed = match timestamp_in_seconds {
        Some(ts) if pool.liquidity != 0 && ts > pool.reward_last_updated_timestamp => {
            ts - pool.reward_last_updated_timestamp
        }
        _ => 0,
    };

    let mut growths = [0u128; NUM_REWARDS];
    for (growth, info) in growths.iter_mut().zip(pool.reward_infos.iter()) {
        *growth = info.growth_global_x64;
        if elapsed > 0 && info.initialized() {
            let delta = emissions_growth_delta(elapsed, info.emissions_per_second_x64, pool.liquidity);
            *growth = growth.wrapping_add(delta);
        }
    }
    growths
}

/// Quote the rewards a position could collect, per reward slot.
///
/// Uses the same growth-inside derivation as fees with each slot's global growth
/// and the ticks' reward growth outside values.
pub fn collect_rewards_quote(param: CollectRewardsQuoteParam) -> CollectRewardsQuote {
    let CollectRewardsQuoteParam {
        pool,
        position,
        tick_lower,
        tick_upper,
        timestamp_in_seconds,
    } = param;

    let growths_global = reward_growths_global(pool, timestamp_in_seconds);

    let mut quote = [None; NUM_REWARDS];
    for (i, info) in pool.reward_infos.iter().enumerate() {
        if !info.initialized() {
            continue;
        }

        let growth_inside = Tick::reward_growth_inside(
            tick_lower,
            tick_upper,
            position.tick_lower_index,
            position.tick_upper_index,
            pool.tick_current_index,
            i,
            growths_global[i],
        );
        let position_reward = &position.reward_infos[i];
        quote[i] = Some(accumulate_owed(
            position_reward.amount_owed,
            growth_inside,
            position_reward.growth_inside_checkpoint,
            position.liquidity,
        ));
    }

    CollectRewardsQuote(quote)
}
