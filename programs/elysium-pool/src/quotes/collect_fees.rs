use crate::math::growth::accumulate_owed;
use crate::state::{ElysiumPool, Position, Tick};

/// Snapshots needed to quote a position's uncollected fees
#[derive(Debug, Clone, Copy)]
pub struct CollectFeesQuoteParam<'a> {
    pub pool: &'a ElysiumPool,
    pub position: &'a Position,
    pub tick_lower: &'a Tick,
    pub tick_upper: &'a Tick,
}

/// Total fees owed to the position, as collect_fees would transfer them
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectFeesQuote {
    pub fee_owed_a: u64,
    pub fee_owed_b: u64,
}

/// Quote the fees a position could collect right now.
///
/// Replays the program's update_fees_and_rewards accounting: fee growth inside
/// the range is derived from the global and tick outside values, and the growth
/// since the position checkpoint is scaled by the position liquidity.
pub fn collect_fees_quote(param: CollectFeesQuoteParam) -> CollectFeesQuote {
    let CollectFeesQuoteParam {
        pool,
        position,
        tick_lower,
        tick_upper,
    } = param;

    let (fee_growth_inside_a, fee_growth_inside_b) = Tick::fee_growths_inside(
        tick_lower,
        tick_upper,
        position.tick_lower_index,
        position.tick_upper_index,
        pool.tick_current_index,
        pool.fee_growth_global_a,
        pool.fee_growth_global_b,
    );

    CollectFeesQuote {
        fee_owed_a: accumulate_owed(
            position.fee_owed_a,
            fee_growth_inside_a,
            position.fee_growth_checkpoint_a,
            position.liquidity,
        ),
        fee_owed_b: accumulate_owed(
            position.fee_owed_b,
            fee_growth_inside_b,
            position.fee_growth_checkpoint_b,
            position.liquidity,
        ),
    }
}
