//! Enemy turn policy

use crate::config::ConfigError;
use crate::moves::{MoveLibrary, MoveTemplate};
use crate::unit::Unit;

/// Picks what an enemy does on its turn
///
/// Every enemy uses the same configured move against the player. Cooldowns do
/// not apply to it.
#[derive(Debug, Clone)]
pub struct EnemyController {
    attack: MoveTemplate,
}

impl EnemyController {
    pub fn new(attack: MoveTemplate) -> Self {
        EnemyController { attack }
    }

    /// Use a move from the library by id
    pub fn from_library(library: &MoveLibrary, move_id: &str) -> Result<Self, ConfigError> {
        library
            .get(move_id)
            .cloned()
            .map(EnemyController::new)
            .ok_or_else(|| ConfigError::UnknownMove(move_id.to_string()))
    }

    pub fn choose_move(&self, _enemy: &Unit) -> &MoveTemplate {
        &self.attack
    }
}
