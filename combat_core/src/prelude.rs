//! Prelude module for convenient imports
//!
//! ```rust
//! use combat_core::prelude::*;
//! ```

// Units and stats
pub use crate::stats::{BaseStats, StatBonus, StatSource, UnitLibrary, UnitTemplate};
pub use crate::unit::Unit;
pub use crate::types::{ActionClass, EffectKind, MoveCategory, TargetMode, UnitId, UnitKind};

// Moves
pub use crate::moves::{CombatMove, MoveLibrary, MoveTemplate};

// Encounter
pub use crate::encounter::{
    CombatEvent, Encounter, EncounterError, EncounterResult, EncounterState, EnemyController,
    TargetingRequirement,
};
pub use crate::combat::CombatOutcome;

// Config
pub use crate::config::{default_constants, default_moves, default_units, CombatConstants};
