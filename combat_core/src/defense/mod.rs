//! Defense system - Dodge, mitigation, block and armour
//!
//! Physical damage runs dodge, then percentage mitigation, then block, then
//! flat defense, and is rounded once at the end. Magical damage skips dodge
//! and block and rounds after each stage.

mod armour;
mod block;
mod evasion;
mod mitigation;

pub use armour::apply_flat_defense;
pub use block::{apply_block, BlockOutcome};
pub use evasion::{roll_dodge, roll_percent};
pub use mitigation::apply_mitigation;

use crate::config::CombatConstants;
use crate::types::{round_half_even, EffectKind};
use crate::unit::Unit;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Stage-by-stage record of one hit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MitigationBreakdown {
    pub raw: f64,
    pub after_mitigation: f64,
    pub after_block: f64,
    pub after_defense: f64,
    /// Integer damage to subtract from HP
    pub final_damage: u32,
    pub dodged: bool,
    pub blocked: f64,
}

impl MitigationBreakdown {
    fn dodged(raw: f64) -> Self {
        MitigationBreakdown {
            raw,
            dodged: true,
            ..Default::default()
        }
    }
}

fn to_damage(value: f64) -> u32 {
    round_half_even(value.max(0.0)) as u32
}

/// Run a physical hit through the target's defenses
///
/// Mutates the target's block and mitigation pools according to the rules in
/// `constants`, but does not touch HP.
pub fn run_physical_pipeline(
    target: &mut Unit,
    raw: f64,
    constants: &CombatConstants,
    rng: &mut impl Rng,
) -> MitigationBreakdown {
    if roll_dodge(target.current_dodge, rng) {
        return MitigationBreakdown::dodged(raw);
    }

    let mut after_mitigation = raw;
    if target.has_physical_mitigation() {
        after_mitigation = apply_mitigation(raw, target.current_physical_mitigation);
        if constants.mitigation.consume_mitigation {
            target.current_physical_mitigation = 0.0;
            let removed = target.clear_spent_mitigation();
            tracing::debug!(unit = %target.name, removed, "physical mitigation consumed");
        }
    }

    let mut after_block = after_mitigation;
    let mut blocked = 0.0;
    if target.effects.is_active(EffectKind::Block) {
        let outcome = apply_block(
            after_mitigation,
            target.current_physical_block,
            target.physical_block_power,
            &constants.block,
        );
        after_block = outcome.damage;
        blocked = outcome.absorbed;
        target.current_physical_block = outcome.remaining_pool;
        if constants.block.consume_block && outcome.remaining_pool <= 0.0 {
            let removed = target.effects.remove_kind(EffectKind::Block);
            tracing::debug!(unit = %target.name, removed, "block pool consumed");
        }
    }

    let after_defense = apply_flat_defense(after_block, target.current_physical_defense);

    MitigationBreakdown {
        raw,
        after_mitigation,
        after_block,
        after_defense,
        final_damage: to_damage(after_defense),
        dodged: false,
        blocked,
    }
}

/// Run a magical hit through the target's defenses
pub fn run_magical_pipeline(
    target: &mut Unit,
    raw: f64,
    constants: &CombatConstants,
) -> MitigationBreakdown {
    let after_mitigation = round_half_even(apply_mitigation(raw, target.current_magical_mitigation));
    if constants.mitigation.consume_mitigation && target.has_magical_mitigation() {
        target.current_magical_mitigation = 0.0;
        let removed = target.clear_spent_mitigation();
        tracing::debug!(unit = %target.name, removed, "magical mitigation consumed");
    }

    let after_defense = apply_flat_defense(after_mitigation, target.current_magical_defense);

    MitigationBreakdown {
        raw,
        after_mitigation,
        after_block: after_mitigation,
        after_defense,
        final_damage: to_damage(after_defense),
        dodged: false,
        blocked: 0.0,
    }
}
