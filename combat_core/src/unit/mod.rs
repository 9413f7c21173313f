//! Unit - Per-encounter combat state of one participant

use crate::config::ConfigError;
use crate::effect::EffectLedger;
use crate::moves::{CombatMove, MoveLibrary};
use crate::stats::UnitTemplate;
use crate::types::{round_half_even, EffectKind, UnitId, UnitKind};
use serde::{Deserialize, Serialize};

/// A unit taking part in an encounter
///
/// Current stats are derived once from the template when the unit is built
/// and then mutated by combat. Attack and ability power are stored without
/// effect multipliers; use [`Unit::current_attack_power`] to read them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    pub(crate) id: UnitId,
    pub name: String,
    pub kind: UnitKind,
    pub level: u32,
    pub template_id: String,

    pub current_hp: f64,
    pub current_max_hp: f64,
    pub current_strength: f64,
    pub current_agility: f64,
    pub current_intellect: f64,
    base_attack_power: f64,
    base_ability_power: f64,
    pub current_physical_crit_chance: f64,
    pub current_magical_crit_chance: f64,
    pub current_physical_defense: f64,
    pub current_magical_defense: f64,
    /// Fraction of physical damage removed while a mitigation effect is active
    pub current_physical_mitigation: f64,
    pub current_magical_mitigation: f64,
    /// Block pool granted by block moves
    pub current_physical_block: f64,
    /// Flat block added on top of the pool
    pub physical_block_power: f64,
    pub current_dodge: f64,
    pub current_speed: f64,
    pub crit_multiplier: f64,

    pub effects: EffectLedger,
    pub moves: Vec<CombatMove>,
}

impl Unit {
    /// Build a unit at full health from a template
    pub fn from_template(template: &UnitTemplate, level: u32) -> Self {
        let stats = template.derive(level);
        Unit {
            id: UnitId(0),
            name: template.name.clone(),
            kind: template.kind,
            level,
            template_id: template.id.clone(),
            current_hp: stats.max_hp,
            current_max_hp: stats.max_hp,
            current_strength: stats.strength,
            current_agility: stats.agility,
            current_intellect: stats.intellect,
            base_attack_power: stats.attack_power,
            base_ability_power: stats.ability_power,
            current_physical_crit_chance: stats.physical_crit_chance,
            current_magical_crit_chance: stats.magical_crit_chance,
            current_physical_defense: stats.physical_defense,
            current_magical_defense: stats.magical_defense,
            current_physical_mitigation: 0.0,
            current_magical_mitigation: 0.0,
            current_physical_block: 0.0,
            physical_block_power: stats.physical_block_power,
            current_dodge: stats.dodge_chance,
            current_speed: stats.speed,
            crit_multiplier: stats.crit_multiplier,
            effects: EffectLedger::new(),
            moves: Vec::new(),
        }
    }

    /// Build a unit and give it the template's moves from a library
    pub fn from_library(
        template: &UnitTemplate,
        level: u32,
        moves: &MoveLibrary,
    ) -> Result<Self, ConfigError> {
        let unit_moves = moves.instantiate(&template.moves)?;
        Ok(Unit::from_template(template, level).with_moves(unit_moves))
    }

    pub fn with_moves(mut self, moves: Vec<CombatMove>) -> Self {
        self.moves = moves;
        self
    }

    pub fn with_current_hp(mut self, hp: f64) -> Self {
        self.current_hp = hp;
        self
    }

    pub fn id(&self) -> UnitId {
        self.id
    }

    pub fn is_player(&self) -> bool {
        self.kind.is_player()
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0.0
    }

    /// HP for presentation, never below zero
    pub fn displayed_hp(&self) -> u32 {
        round_half_even(self.current_hp.max(0.0)) as u32
    }

    pub fn base_attack_power(&self) -> f64 {
        self.base_attack_power
    }

    pub fn base_ability_power(&self) -> f64 {
        self.base_ability_power
    }

    pub fn set_base_attack_power(&mut self, value: f64) {
        self.base_attack_power = value;
    }

    pub fn set_base_ability_power(&mut self, value: f64) {
        self.base_ability_power = value;
    }

    fn power_multiplier(&self) -> f64 {
        self.effects.multiplier_for(EffectKind::Strengthen)
            * self.effects.multiplier_for(EffectKind::Weaken)
    }

    pub fn current_attack_power(&self) -> f64 {
        self.base_attack_power * self.power_multiplier()
    }

    pub fn current_ability_power(&self) -> f64 {
        self.base_ability_power * self.power_multiplier()
    }

    pub fn is_silenced(&self) -> bool {
        self.effects.is_active(EffectKind::Silence)
    }

    pub fn has_physical_mitigation(&self) -> bool {
        self.effects.is_active(EffectKind::PhysMitigation)
            || self.effects.is_active(EffectKind::AllMitigation)
    }

    pub fn has_magical_mitigation(&self) -> bool {
        self.effects.is_active(EffectKind::MagicMitigation)
            || self.effects.is_active(EffectKind::AllMitigation)
    }

    pub fn decrease_cooldowns(&mut self) {
        for combat_move in &mut self.moves {
            combat_move.cooldown.decrease();
        }
    }

    /// Drop mitigation effects whose fraction has been spent
    ///
    /// AllMitigation covers both paths, so it goes only once both are zero.
    pub fn clear_spent_mitigation(&mut self) -> usize {
        let mut removed = 0;
        if self.current_physical_mitigation <= 0.0 {
            removed += self.effects.remove_kind(EffectKind::PhysMitigation);
        }
        if self.current_magical_mitigation <= 0.0 {
            removed += self.effects.remove_kind(EffectKind::MagicMitigation);
        }
        if self.current_physical_mitigation <= 0.0 && self.current_magical_mitigation <= 0.0 {
            removed += self.effects.remove_kind(EffectKind::AllMitigation);
        }
        removed
    }

    /// Zero any pool whose backing effect is gone
    pub fn sync_pools(&mut self) {
        if !self.effects.is_active(EffectKind::Block) {
            self.current_physical_block = 0.0;
        }
        if !self.has_physical_mitigation() {
            self.current_physical_mitigation = 0.0;
        }
        if !self.has_magical_mitigation() {
            self.current_magical_mitigation = 0.0;
        }
    }
}
