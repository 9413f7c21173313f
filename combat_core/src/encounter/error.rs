//! Encounter errors

use super::EncounterState;
use crate::types::{ActionClass, UnitId};
use thiserror::Error;

/// Errors returned by encounter setup and player input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EncounterError {
    #[error("Expected encounter state {expected:?}, but it is {actual:?}")]
    InvalidState {
        expected: EncounterState,
        actual: EncounterState,
    },
    #[error("Encounter has no player unit")]
    MissingPlayer,
    #[error("Encounter has {0} player units, expected one")]
    MultiplePlayers(usize),
    #[error("Too many enemies: {0} (formation holds 5)")]
    TooManyEnemies(usize),
    #[error("Unit {unit} has invalid speed {speed}")]
    InvalidSpeed { unit: UnitId, speed: f64 },
    #[error("{0:?} action already used this turn")]
    ActionAlreadyUsed(ActionClass),
    #[error("{0} is on cooldown")]
    MoveOnCooldown(String),
    #[error("{0} is silenced")]
    Silenced(String),
    #[error("No move in slot {0}")]
    UnknownMove(usize),
    #[error("No target at index {0}")]
    InvalidTarget(usize),
    #[error("{name} is a {actual:?} move, but {expected:?} was chosen")]
    WrongActionClass {
        name: String,
        expected: ActionClass,
        actual: ActionClass,
    },
    #[error("Move requires a target")]
    MissingTarget,
    #[error("Unknown unit {0}")]
    UnknownUnit(UnitId),
}
