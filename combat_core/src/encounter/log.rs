//! Combat log - descriptive records for a presentation layer

use super::EncounterResult;
use crate::effect::ActiveEffect;
use crate::types::EffectKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Something a player-facing log should show
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CombatEvent {
    EncounterStarted {
        player: String,
        enemies: Vec<String>,
    },
    PlayerTurn {
        round: u32,
    },
    EnemyTurn {
        enemy: String,
    },
    /// Player may act again this turn
    NextAction {
        remaining: u32,
    },
    MoveUsed {
        user: String,
        move_name: String,
    },
    DamageDealt {
        attacker: String,
        target: String,
        move_name: String,
        damage: u32,
        critical: bool,
        dodged: bool,
    },
    Healed {
        unit: String,
        amount: f64,
    },
    /// Emitted whenever an effect lands on a unit
    EffectApplied {
        unit: String,
        effect: ActiveEffect,
    },
    EffectExpired {
        unit: String,
        effect: EffectKind,
    },
    /// Poison damage or renew healing from an active effect
    EffectTick {
        unit: String,
        effect: EffectKind,
        amount: f64,
    },
    CooldownBlocked {
        move_name: String,
        remaining: u32,
    },
    SilenceBlocked {
        unit: String,
    },
    ActionsSkipped {
        remaining: u32,
    },
    UnitDied {
        unit: String,
    },
    Victory {
        result: EncounterResult,
    },
    Defeat,
}

impl fmt::Display for CombatEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombatEvent::EncounterStarted { player, enemies } => {
                write!(f, "{} is attacked by {}!", player, enemies.join(", "))
            }
            CombatEvent::PlayerTurn { round } => write!(f, "Round {}: your turn.", round),
            CombatEvent::EnemyTurn { enemy } => write!(f, "{}'s turn.", enemy),
            CombatEvent::NextAction { remaining } => {
                write!(f, "You can act {} more time(s).", remaining)
            }
            CombatEvent::MoveUsed { user, move_name } => write!(f, "{} used {}.", user, move_name),
            CombatEvent::DamageDealt {
                attacker,
                target,
                move_name,
                damage,
                critical,
                dodged,
            } => {
                if *dodged {
                    write!(f, "{} dodged {}'s {}.", target, attacker, move_name)
                } else if *critical {
                    write!(
                        f,
                        "{}'s {} critically hit {} for {} damage!",
                        attacker, move_name, target, damage
                    )
                } else {
                    write!(
                        f,
                        "{}'s {} hit {} for {} damage.",
                        attacker, move_name, target, damage
                    )
                }
            }
            CombatEvent::Healed { unit, amount } => {
                write!(f, "{} healed for {:.0}.", unit, amount)
            }
            CombatEvent::EffectApplied { unit, effect } => write!(
                f,
                "{} gained {} ({}) for {} turn(s).",
                unit,
                effect.kind,
                effect.source,
                effect.remaining_turns()
            ),
            CombatEvent::EffectExpired { unit, effect } => {
                write!(f, "{}'s {} wore off.", unit, effect)
            }
            CombatEvent::EffectTick {
                unit,
                effect,
                amount,
            } => match effect {
                EffectKind::Renew => write!(f, "{} recovered {:.0} from renew.", unit, amount),
                _ => write!(f, "{} suffered {:.0} from {}.", unit, amount, effect),
            },
            CombatEvent::CooldownBlocked {
                move_name,
                remaining,
            } => write!(
                f,
                "{} is on cooldown for {} more turn(s).",
                move_name, remaining
            ),
            CombatEvent::SilenceBlocked { unit } => {
                write!(f, "{} is silenced and cannot use moves.", unit)
            }
            CombatEvent::ActionsSkipped { remaining } => {
                write!(f, "Passed with {} action(s) left.", remaining)
            }
            CombatEvent::UnitDied { unit } => write!(f, "{} was defeated.", unit),
            CombatEvent::Victory { result } => write!(
                f,
                "Victory! Gained {} experience.",
                result.experience_gained
            ),
            CombatEvent::Defeat => write!(f, "You were defeated..."),
        }
    }
}

/// Ordered event buffer the caller drains
#[derive(Debug, Clone, Default)]
pub struct CombatLog {
    events: Vec<CombatEvent>,
}

impl CombatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: CombatEvent) {
        tracing::debug!(%event, "combat log");
        self.events.push(event);
    }

    pub fn events(&self) -> &[CombatEvent] {
        &self.events
    }

    pub fn drain(&mut self) -> Vec<CombatEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_lines() {
        let hit = CombatEvent::DamageDealt {
            attacker: "Hero".to_string(),
            target: "Wolf".to_string(),
            move_name: "Strike".to_string(),
            damage: 12,
            critical: false,
            dodged: false,
        };
        assert_eq!(hit.to_string(), "Hero's Strike hit Wolf for 12 damage.");

        let miss = CombatEvent::DamageDealt {
            attacker: "Hero".to_string(),
            target: "Wolf".to_string(),
            move_name: "Strike".to_string(),
            damage: 0,
            critical: false,
            dodged: true,
        };
        assert_eq!(miss.to_string(), "Wolf dodged Hero's Strike.");
    }

    #[test]
    fn test_drain_empties_log() {
        let mut log = CombatLog::new();
        log.push(CombatEvent::Defeat);
        log.push(CombatEvent::PlayerTurn { round: 1 });
        assert_eq!(log.len(), 2);

        let drained = log.drain();
        assert_eq!(drained.len(), 2);
        assert!(log.is_empty());
    }

    #[test]
    fn test_events_serialize_for_front_ends() {
        let event = CombatEvent::UnitDied {
            unit: "Wolf".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"UnitDied":{"unit":"Wolf"}}"#);
        let back: CombatEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
