//! Turn-boundary effect processing

use super::{ActiveEffect, EffectTrigger};
use crate::combat::{apply_true_damage, heal, CombatOutcome};
use crate::types::EffectKind;
use crate::unit::Unit;

/// What happened to a unit at a turn boundary
#[derive(Debug, Clone, Default)]
pub struct TurnBoundaryReport {
    /// HP restored by each Renew tick
    pub heals: Vec<f64>,
    /// Poison damage taken, one outcome per tick
    pub poison: Vec<CombatOutcome>,
    pub expired: Vec<ActiveEffect>,
}

impl TurnBoundaryReport {
    /// Whether poison brought the unit to zero HP
    pub fn is_dead(&self) -> bool {
        self.poison.iter().any(|o| o.is_dead)
    }
}

/// Tick a unit's effects for one phase and apply their HP changes
///
/// Block and mitigation pools are cleared once their last backing effect
/// expires.
pub fn process_turn_boundary(unit: &mut Unit, start_of_turn: bool) -> TurnBoundaryReport {
    let tick = unit.effects.tick(start_of_turn);
    let mut report = TurnBoundaryReport::default();

    for EffectTrigger { kind, power } in tick.triggers {
        match kind {
            EffectKind::Renew => report.heals.push(heal(unit, power)),
            EffectKind::Poison => report.poison.push(apply_true_damage(unit, power)),
            _ => {}
        }
    }

    if tick.expired.iter().any(|e| e.kind.has_pool()) {
        unit.sync_pools();
    }

    for effect in &tick.expired {
        tracing::debug!(unit = %unit.name, effect = %effect.kind, "effect expired");
    }
    report.expired = tick.expired;
    report
}
