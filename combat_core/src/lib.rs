//! combat_core - Turn-based combat engine for a party-versus-monsters RPG
//!
//! This library provides:
//! - UnitTemplate / Unit: Level-scaled stats and live combat state
//! - EffectLedger: Timed buffs, debuffs, pools and damage over time
//! - Mitigation pipeline: Dodge, mitigation, block and flat defense
//! - MoveExecutor: Dispatch of moves by category and targeting mode
//! - InitiativeScheduler: Speed-weighted turn order
//! - Encounter: The player-input driven combat state machine

pub mod combat;
pub mod config;
pub mod damage;
pub mod defense;
pub mod effect;
pub mod encounter;
pub mod moves;
pub mod prelude;
pub mod roster;
pub mod stats;
pub mod turn;
pub mod types;
pub mod unit;

// Re-export core types for convenience
pub use combat::{apply_incoming_damage, apply_true_damage, heal, CombatOutcome};
pub use config::{
    default_constants, default_moves, default_units, CombatConstants, ConfigError,
};
pub use damage::{roll_outgoing_damage, OutgoingDamage};
pub use defense::MitigationBreakdown;
pub use effect::{ActiveEffect, EffectLedger, TurnBoundaryReport};
pub use encounter::{
    CombatEvent, CombatLog, EncounterError, EncounterResult, EncounterState, Encounter,
    EnemyController, TargetingRequirement,
};
pub use moves::{CombatMove, MoveExecutor, MoveLibrary, MoveTemplate};
pub use roster::{Formation, FormationSlot, Roster};
pub use stats::{BaseStats, DerivedStats, StatBonus, StatBonusKind, StatSource, UnitLibrary, UnitTemplate};
pub use turn::InitiativeScheduler;
pub use types::{ActionClass, EffectKind, MoveCategory, TargetMode, UnitId, UnitKind};
pub use unit::Unit;
