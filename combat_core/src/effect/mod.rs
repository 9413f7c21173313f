//! Effect ledger - active timed effects on a unit

mod active;
pub mod tick;

pub use active::{ActiveEffect, DurationTracker};
pub use tick::{process_turn_boundary, TurnBoundaryReport};

use crate::moves::MoveTemplate;
use crate::types::EffectKind;
use serde::{Deserialize, Serialize};

/// Heal or damage an effect asks its owner to take this tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectTrigger {
    pub kind: EffectKind,
    pub power: f64,
}

/// Result of ticking a ledger
#[derive(Debug, Clone, Default)]
pub struct EffectTickResult {
    /// Renew/Poison triggers, in ledger order
    pub triggers: Vec<EffectTrigger>,
    /// Effects removed by this tick
    pub expired: Vec<ActiveEffect>,
}

/// Effects currently active on one unit
///
/// Instances of the same kind stack; nothing is deduplicated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EffectLedger {
    effects: Vec<ActiveEffect>,
}

impl EffectLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the move's effect and add it to the ledger
    pub fn apply(&mut self, template: &MoveTemplate) -> ActiveEffect {
        tracing::debug!(
            effect = %template.effect,
            power = template.power,
            duration = template.duration,
            "effect applied"
        );
        let effect = ActiveEffect::from_move(template);
        self.effects.push(effect.clone());
        effect
    }

    /// Tick every effect whose phase matches
    ///
    /// Renew and Poison report a trigger before their duration is decremented.
    /// Expired effects are removed once the whole pass has run.
    pub fn tick(&mut self, start_of_turn: bool) -> EffectTickResult {
        let mut result = EffectTickResult::default();
        let mut expired_flags = Vec::with_capacity(self.effects.len());

        for effect in self.effects.iter_mut() {
            if !effect.ticks_in(start_of_turn) {
                expired_flags.push(false);
                continue;
            }
            if matches!(effect.kind, EffectKind::Renew | EffectKind::Poison) {
                result.triggers.push(EffectTrigger {
                    kind: effect.kind,
                    power: effect.power,
                });
            }
            expired_flags.push(effect.duration.tick());
        }

        let mut kept = Vec::with_capacity(self.effects.len());
        for (effect, expired) in self.effects.drain(..).zip(expired_flags) {
            if expired {
                result.expired.push(effect);
            } else {
                kept.push(effect);
            }
        }
        self.effects = kept;

        result
    }

    pub fn is_active(&self, kind: EffectKind) -> bool {
        self.effects.iter().any(|e| e.kind == kind)
    }

    pub fn count(&self, kind: EffectKind) -> usize {
        self.effects.iter().filter(|e| e.kind == kind).count()
    }

    /// Stat multiplier contributed by all effects of a kind
    ///
    /// Strengthen stacks multiplicatively, Weaken additively. Weaken is not
    /// floored and can go negative. Other kinds return 1.
    pub fn multiplier_for(&self, kind: EffectKind) -> f64 {
        let powers = self
            .effects
            .iter()
            .filter(|e| e.kind == kind)
            .map(|e| e.power / 100.0);

        match kind {
            EffectKind::Strengthen => powers.fold(1.0, |acc, p| acc * (p + 1.0)),
            EffectKind::Weaken => 1.0 - powers.sum::<f64>(),
            _ => 1.0,
        }
    }

    /// Drop every effect of a kind, returning how many were removed
    pub fn remove_kind(&mut self, kind: EffectKind) -> usize {
        let before = self.effects.len();
        self.effects.retain(|e| e.kind != kind);
        before - self.effects.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActiveEffect> {
        self.effects.iter()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn clear(&mut self) {
        self.effects.clear();
    }
}
