//! DerivedStats - Level-scaled stats computed from a template

use crate::stats::UnitTemplate;
use crate::types::round_half_even;
use serde::{Deserialize, Serialize};

/// Stats a unit enters combat with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedStats {
    pub max_hp: f64,
    pub strength: f64,
    pub agility: f64,
    pub intellect: f64,
    pub attack_power: f64,
    pub ability_power: f64,
    pub physical_crit_chance: f64,
    pub magical_crit_chance: f64,
    pub physical_defense: f64,
    pub magical_defense: f64,
    pub physical_block_power: f64,
    pub dodge_chance: f64,
    pub speed: f64,
    pub crit_multiplier: f64,
}

impl UnitTemplate {
    /// Derive combat stats at a given level
    ///
    /// Player primaries (strength, agility, intellect) do not scale with level.
    /// Cross-stat ratios read the template's base primaries.
    pub fn derive(&self, level: u32) -> DerivedStats {
        let levels = level.saturating_sub(1) as f64;
        let base = &self.base;
        let ratios = &self.ratios;
        let growth = &self.growth;

        let scaled = |value: f64, per_level: f64| {
            if self.is_player() {
                value
            } else {
                value + per_level * levels
            }
        };

        DerivedStats {
            max_hp: round_half_even(base.max_hp + growth.max_hp * levels),
            strength: scaled(base.strength, growth.strength),
            agility: scaled(base.agility, growth.agility),
            intellect: scaled(base.intellect, growth.intellect),
            attack_power: base.attack_power
                + base.strength * ratios.strength_ap_ratio
                + base.agility * ratios.agility_ap_ratio,
            ability_power: base.ability_power + base.intellect * ratios.intellect_abp_ratio,
            physical_crit_chance: base.physical_crit_chance
                + base.agility * ratios.agility_crit_ratio / 100.0,
            magical_crit_chance: base.magical_crit_chance
                + base.intellect * ratios.intellect_crit_ratio / 100.0,
            physical_defense: base.physical_defense
                + growth.physical_defense * levels
                + base.strength * ratios.strength_phys_def_ratio
                + base.agility * ratios.agility_phys_def_ratio,
            magical_defense: base.magical_defense + growth.magical_defense * levels,
            physical_block_power: base.physical_block_power
                + growth.physical_block_power * levels,
            dodge_chance: base.dodge_chance + base.agility * ratios.agility_dodge_ratio / 100.0,
            speed: base.speed + growth.speed * levels + base.agility * ratios.agility_speed_ratio,
            crit_multiplier: ratios.crit_multiplier,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::stats::{BaseStats, StatRatios, UnitTemplate};
    use crate::types::UnitKind;

    fn base() -> BaseStats {
        BaseStats {
            max_hp: 40.0,
            strength: 5.0,
            agility: 4.0,
            intellect: 3.0,
            attack_power: 2.0,
            ability_power: 1.0,
            physical_crit_chance: 0.05,
            magical_crit_chance: 0.05,
            physical_defense: 1.0,
            magical_defense: 1.0,
            physical_block_power: 2.0,
            dodge_chance: 0.0,
            speed: 6.0,
        }
    }

    #[test]
    fn test_enemy_scales_with_level() {
        let template = UnitTemplate::new("wolf", UnitKind::Enemy, base());
        let stats = template.derive(3);

        assert!((stats.max_hp - 44.0).abs() < f64::EPSILON);
        assert!((stats.strength - 7.0).abs() < f64::EPSILON);
        assert!((stats.agility - 6.0).abs() < f64::EPSILON);
        assert!((stats.intellect - 5.0).abs() < f64::EPSILON);
        // 1 + 1*2 + 5*1 + 4*2
        assert!((stats.physical_defense - 16.0).abs() < f64::EPSILON);
        assert!((stats.magical_defense - 5.0).abs() < f64::EPSILON);
        assert!((stats.physical_block_power - 4.0).abs() < f64::EPSILON);
        // 6 + 2*2 + 4*1
        assert!((stats.speed - 14.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_player_primaries_are_flat() {
        let template = UnitTemplate::new("hero", UnitKind::Player, base());
        let stats = template.derive(5);

        assert!((stats.strength - 5.0).abs() < f64::EPSILON);
        assert!((stats.agility - 4.0).abs() < f64::EPSILON);
        assert!((stats.intellect - 3.0).abs() < f64::EPSILON);
        assert!((stats.max_hp - 48.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cross_stat_ratios() {
        let template = UnitTemplate::new("hero", UnitKind::Player, base());
        let stats = template.derive(1);

        // 2 + 5*2 + 4*1
        assert!((stats.attack_power - 16.0).abs() < f64::EPSILON);
        // 1 + 3*2
        assert!((stats.ability_power - 7.0).abs() < f64::EPSILON);
        // 0.05 + 4*0.05/100
        assert!((stats.physical_crit_chance - 0.052).abs() < 1e-9);
        assert!((stats.dodge_chance - 0.002).abs() < 1e-9);
        assert!((stats.crit_multiplier - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_ratios() {
        let template =
            UnitTemplate::new("dummy", UnitKind::Enemy, base()).with_ratios(StatRatios::none());
        let stats = template.derive(1);
        assert!((stats.attack_power - 2.0).abs() < f64::EPSILON);
        assert!((stats.speed - 6.0).abs() < f64::EPSILON);
    }
}
