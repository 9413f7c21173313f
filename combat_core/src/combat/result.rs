//! CombatOutcome - What happened to one target of a move

use crate::types::UnitId;
use serde::{Deserialize, Serialize};

/// Per-target result of a move or effect tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatOutcome {
    pub target: UnitId,
    /// Target HP is at or below zero after this hit
    pub is_dead: bool,
    /// HP removed; zero for dodges and non-damaging effects
    pub damage: u32,
    pub dodged: bool,
    pub critical: bool,
}

impl CombatOutcome {
    /// Outcome for a non-damaging application
    pub fn no_damage(target: UnitId) -> Self {
        CombatOutcome {
            target,
            is_dead: false,
            damage: 0,
            dodged: false,
            critical: false,
        }
    }

    pub fn dodged(target: UnitId) -> Self {
        CombatOutcome {
            dodged: true,
            ..CombatOutcome::no_damage(target)
        }
    }

    /// Short description for logs
    pub fn summary(&self) -> String {
        if self.dodged {
            return format!("{} dodged", self.target);
        }
        let mut text = format!("{} took {} damage", self.target, self.damage);
        if self.critical {
            text.push_str(" (critical)");
        }
        if self.is_dead {
            text.push_str(" and died");
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary() {
        let outcome = CombatOutcome {
            target: UnitId(2),
            is_dead: true,
            damage: 12,
            dodged: false,
            critical: true,
        };
        assert_eq!(outcome.summary(), "#2 took 12 damage (critical) and died");
        assert_eq!(CombatOutcome::dodged(UnitId(1)).summary(), "#1 dodged");
    }
}
