//! UnitTemplate - Base stats, ratios and growth for a kind of unit

use crate::types::UnitKind;
use serde::{Deserialize, Serialize};

/// Flat starting stats of a template
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseStats {
    pub max_hp: f64,
    pub strength: f64,
    pub agility: f64,
    pub intellect: f64,
    pub attack_power: f64,
    pub ability_power: f64,
    /// Fraction, 0.05 = 5%
    pub physical_crit_chance: f64,
    pub magical_crit_chance: f64,
    pub physical_defense: f64,
    pub magical_defense: f64,
    pub physical_block_power: f64,
    pub dodge_chance: f64,
    pub speed: f64,
}

/// Cross-stat conversion ratios
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatRatios {
    pub strength_ap_ratio: f64,
    pub agility_ap_ratio: f64,
    pub intellect_abp_ratio: f64,
    pub agility_crit_ratio: f64,
    pub intellect_crit_ratio: f64,
    pub strength_phys_def_ratio: f64,
    pub agility_phys_def_ratio: f64,
    pub agility_dodge_ratio: f64,
    pub agility_speed_ratio: f64,
    pub crit_multiplier: f64,
}

impl Default for StatRatios {
    fn default() -> Self {
        StatRatios {
            strength_ap_ratio: 2.0,
            agility_ap_ratio: 1.0,
            intellect_abp_ratio: 2.0,
            agility_crit_ratio: 0.05,
            intellect_crit_ratio: 0.05,
            strength_phys_def_ratio: 1.0,
            agility_phys_def_ratio: 2.0,
            agility_dodge_ratio: 0.05,
            agility_speed_ratio: 1.0,
            crit_multiplier: 2.0,
        }
    }
}

impl StatRatios {
    /// No cross-stat contributions and a neutral crit multiplier
    pub fn none() -> Self {
        StatRatios {
            strength_ap_ratio: 0.0,
            agility_ap_ratio: 0.0,
            intellect_abp_ratio: 0.0,
            agility_crit_ratio: 0.0,
            intellect_crit_ratio: 0.0,
            strength_phys_def_ratio: 0.0,
            agility_phys_def_ratio: 0.0,
            agility_dodge_ratio: 0.0,
            agility_speed_ratio: 0.0,
            crit_multiplier: 2.0,
        }
    }
}

/// Per-level growth, applied as `growth * (level - 1)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatGrowth {
    pub max_hp: f64,
    pub strength: f64,
    pub agility: f64,
    pub intellect: f64,
    pub physical_defense: f64,
    pub magical_defense: f64,
    pub physical_block_power: f64,
    pub speed: f64,
}

impl Default for StatGrowth {
    fn default() -> Self {
        StatGrowth {
            max_hp: 2.0,
            strength: 1.0,
            agility: 1.0,
            intellect: 1.0,
            physical_defense: 1.0,
            magical_defense: 2.0,
            physical_block_power: 1.0,
            speed: 2.0,
        }
    }
}

/// Immutable description of a unit, loaded from configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitTemplate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub kind: UnitKind,
    /// Move ids this unit starts the encounter with
    #[serde(default)]
    pub moves: Vec<String>,
    #[serde(default)]
    pub base: BaseStats,
    #[serde(default)]
    pub ratios: StatRatios,
    #[serde(default)]
    pub growth: StatGrowth,
}

impl UnitTemplate {
    pub fn new(id: &str, kind: UnitKind, base: BaseStats) -> Self {
        UnitTemplate {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            kind,
            moves: Vec::new(),
            base,
            ratios: StatRatios::default(),
            growth: StatGrowth::default(),
        }
    }

    pub fn with_ratios(mut self, ratios: StatRatios) -> Self {
        self.ratios = ratios;
        self
    }

    pub fn with_growth(mut self, growth: StatGrowth) -> Self {
        self.growth = growth;
        self
    }

    pub fn is_player(&self) -> bool {
        self.kind.is_player()
    }
}
