//! ActiveEffect - A timed effect living on a unit

use crate::moves::MoveTemplate;
use crate::types::EffectKind;
use serde::{Deserialize, Serialize};

/// Remaining turns of an effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationTracker {
    remaining: u32,
}

impl DurationTracker {
    pub fn new(turns: u32) -> Self {
        DurationTracker { remaining: turns }
    }

    /// Count down one turn, returning true once the duration has run out
    pub fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining == 0
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

/// Snapshot of a move's effect applied to a unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveEffect {
    pub kind: EffectKind,
    /// Copied from the source move when applied
    pub power: f64,
    pub duration: DurationTracker,
    /// Ticks during the owner's turn-start pass instead of turn-end
    pub expires_at_start_of_turn: bool,
    /// Name of the move that applied it
    pub source: String,
}

impl ActiveEffect {
    pub fn from_move(template: &MoveTemplate) -> Self {
        ActiveEffect {
            kind: template.effect,
            power: f64::from(template.power),
            duration: DurationTracker::new(template.duration),
            expires_at_start_of_turn: template.expires_at_start_of_turn,
            source: template.name.clone(),
        }
    }

    pub fn remaining_turns(&self) -> u32 {
        self.duration.remaining()
    }

    /// Whether this effect ticks in the given phase
    pub fn ticks_in(&self, start_of_turn: bool) -> bool {
        self.expires_at_start_of_turn == start_of_turn
    }
}
