//! Move templates, per-unit move instances and the move executor

mod cooldown;
mod executor;

pub use cooldown::CooldownTracker;
pub use executor::MoveExecutor;

use crate::types::{ActionClass, EffectKind, MoveCategory, TargetMode};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Immutable description of a move, loaded from configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveTemplate {
    /// Unique identifier, used for equality
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: MoveCategory,
    pub action: ActionClass,
    pub targets: TargetMode,
    #[serde(default)]
    pub effect: EffectKind,
    #[serde(default)]
    pub power: i32,
    /// Turns before the move can be used again
    #[serde(default)]
    pub cooldown: u32,
    /// Turns the attached effect lasts
    #[serde(default)]
    pub duration: u32,
    /// Whether the attached effect ticks at the start of its owner's turn
    #[serde(default)]
    pub expires_at_start_of_turn: bool,
}

impl MoveTemplate {
    /// Simple attack with no cooldown and no effect
    pub fn basic(id: &str, category: MoveCategory, power: i32) -> Self {
        MoveTemplate {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            category,
            action: ActionClass::Attack,
            targets: TargetMode::Singular,
            effect: EffectKind::None,
            power,
            cooldown: 0,
            duration: 0,
            expires_at_start_of_turn: false,
        }
    }

    pub fn with_targets(mut self, targets: TargetMode) -> Self {
        self.targets = targets;
        self
    }

    pub fn with_effect(mut self, effect: EffectKind, duration: u32) -> Self {
        self.effect = effect;
        self.duration = duration;
        self
    }

    pub fn with_cooldown(mut self, cooldown: u32) -> Self {
        self.cooldown = cooldown;
        self
    }

    pub fn with_action(mut self, action: ActionClass) -> Self {
        self.action = action;
        self
    }
}

/// A move owned by a unit, carrying its own cooldown state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatMove {
    pub template: MoveTemplate,
    pub cooldown: CooldownTracker,
}

impl CombatMove {
    pub fn new(template: MoveTemplate) -> Self {
        CombatMove {
            template,
            cooldown: CooldownTracker::new(),
        }
    }

    pub fn put_on_cooldown(&mut self) {
        self.cooldown.put_on_cooldown(self.template.cooldown);
    }

    pub fn is_on_cooldown(&self) -> bool {
        self.cooldown.is_on_cooldown()
    }

    pub fn name(&self) -> &str {
        &self.template.name
    }
}

impl From<MoveTemplate> for CombatMove {
    fn from(template: MoveTemplate) -> Self {
        CombatMove::new(template)
    }
}

/// Move templates indexed by id
#[derive(Debug, Clone, Default)]
pub struct MoveLibrary {
    moves: HashMap<String, MoveTemplate>,
}

impl MoveLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a template, returning the one it replaced
    pub fn insert(&mut self, template: MoveTemplate) -> Option<MoveTemplate> {
        self.moves.insert(template.id.clone(), template)
    }

    pub fn get(&self, id: &str) -> Option<&MoveTemplate> {
        self.moves.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.moves.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoveTemplate> {
        self.moves.values()
    }

    /// Fresh move instances for a list of ids, in the order given
    pub fn instantiate(&self, ids: &[String]) -> Result<Vec<CombatMove>, crate::config::ConfigError> {
        ids.iter()
            .map(|id| {
                self.get(id)
                    .cloned()
                    .map(CombatMove::new)
                    .ok_or_else(|| crate::config::ConfigError::UnknownMove(id.clone()))
            })
            .collect()
    }
}
