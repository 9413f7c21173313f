//! Block - Flat absorption from a block pool plus block power

use crate::config::BlockRules;

/// Result of running damage through an active block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockOutcome {
    /// Damage left after the block
    pub damage: f64,
    /// Damage the block soaked up
    pub absorbed: f64,
    /// Block pool after the hit
    pub remaining_pool: f64,
}

/// Absorb damage with `pool + block_power`
///
/// When blocking consumes the pool, a hit larger than the total block empties
/// it. Smaller hits either drain only what they used (split blocking) or
/// empty the pool too.
pub fn apply_block(damage: f64, pool: f64, block_power: f64, rules: &BlockRules) -> BlockOutcome {
    let total = pool + block_power;
    let after = (damage - total).max(0.0);

    let remaining_pool = if !rules.consume_block {
        pool
    } else if damage > total {
        0.0
    } else if rules.block_can_be_split {
        (pool - damage).max(0.0)
    } else {
        0.0
    };

    BlockOutcome {
        damage: after,
        absorbed: damage - after,
        remaining_pool,
    }
}
