//! Core types shared across the combat engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle to a unit owned by an encounter roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitId(pub usize);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which side of the encounter a unit fights for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitKind {
    Player,
    Enemy,
    Boss,
}

impl UnitKind {
    pub fn is_player(self) -> bool {
        matches!(self, UnitKind::Player)
    }

    /// Enemies and bosses share a side
    pub fn is_hostile_to(self, other: UnitKind) -> bool {
        self.is_player() != other.is_player()
    }
}

/// Damage/behaviour category of a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveCategory {
    Physical,
    Magical,
    /// True damage, bypasses every reduction stage
    Suffer,
    Mitigate,
    Block,
    Heal,
    Buff,
    Debuff,
}

impl MoveCategory {
    /// Categories that can roll and take damage
    pub fn is_damaging(self) -> bool {
        matches!(
            self,
            MoveCategory::Physical | MoveCategory::Magical | MoveCategory::Suffer
        )
    }
}

impl fmt::Display for MoveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MoveCategory::Physical => "physical",
            MoveCategory::Magical => "magical",
            MoveCategory::Suffer => "true",
            MoveCategory::Mitigate => "mitigate",
            MoveCategory::Block => "block",
            MoveCategory::Heal => "heal",
            MoveCategory::Buff => "buff",
            MoveCategory::Debuff => "debuff",
        };
        f.write_str(name)
    }
}

/// Action class a player picks before choosing a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionClass {
    Attack,
    Defend,
    Support,
}

impl ActionClass {
    pub fn all() -> &'static [ActionClass] {
        &[ActionClass::Attack, ActionClass::Defend, ActionClass::Support]
    }
}

/// How a move picks the units it affects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetMode {
    /// The user of the move
    #[serde(rename = "self")]
    Caster,
    Singular,
    /// Chosen target plus its neighbour in the formation
    Adjacent,
    /// Every active unit on the opposing side
    Global,
}

impl TargetMode {
    /// Whether the player must pick a target before the move resolves
    pub fn needs_target(self) -> bool {
        matches!(self, TargetMode::Singular | TargetMode::Adjacent)
    }
}

/// Timed effect a move leaves behind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    #[default]
    None,
    /// Heal over time
    Renew,
    /// True damage over time
    Poison,
    /// Prevents move selection
    Silence,
    Strengthen,
    Weaken,
    Block,
    PhysMitigation,
    MagicMitigation,
    AllMitigation,
}

impl EffectKind {
    /// Effects whose expiry is tied to a numeric pool on the unit
    pub fn has_pool(self) -> bool {
        matches!(
            self,
            EffectKind::Block
                | EffectKind::PhysMitigation
                | EffectKind::MagicMitigation
                | EffectKind::AllMitigation
        )
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EffectKind::None => "none",
            EffectKind::Renew => "renew",
            EffectKind::Poison => "poison",
            EffectKind::Silence => "silence",
            EffectKind::Strengthen => "strengthen",
            EffectKind::Weaken => "weaken",
            EffectKind::Block => "block",
            EffectKind::PhysMitigation => "physical mitigation",
            EffectKind::MagicMitigation => "magical mitigation",
            EffectKind::AllMitigation => "mitigation",
        };
        f.write_str(name)
    }
}

/// Round half to even, as all combat rounding does
pub(crate) fn round_half_even(value: f64) -> f64 {
    value.round_ties_even()
}
