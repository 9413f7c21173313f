//! StatBonus - Flat deltas contributed by equipment and stat points

use crate::stats::{BaseStats, UnitTemplate};
use serde::{Deserialize, Serialize};

/// Stat a bonus adds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatBonusKind {
    MaxHp,
    Strength,
    Agility,
    Intellect,
    AttackPower,
    AbilityPower,
    /// Percent
    PhysCritChance,
    /// Percent
    MagicCritChance,
    Armor,
    MagicArmor,
    Block,
    /// Percent
    Dodge,
    Speed,
}

impl StatBonusKind {
    /// Kinds authored in percent and stored as fractions
    pub fn is_percent(self) -> bool {
        matches!(
            self,
            StatBonusKind::PhysCritChance | StatBonusKind::MagicCritChance | StatBonusKind::Dodge
        )
    }
}

/// A single flat stat delta
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatBonus {
    pub kind: StatBonusKind,
    pub value: f64,
}

impl StatBonus {
    pub fn new(kind: StatBonusKind, value: f64) -> Self {
        StatBonus { kind, value }
    }
}

/// Anything that folds stat deltas into a template's base stats
pub trait StatSource {
    fn apply(&self, base: &mut BaseStats);
}

impl StatSource for StatBonus {
    fn apply(&self, base: &mut BaseStats) {
        let value = if self.kind.is_percent() {
            self.value / 100.0
        } else {
            self.value
        };

        let field = match self.kind {
            StatBonusKind::MaxHp => &mut base.max_hp,
            StatBonusKind::Strength => &mut base.strength,
            StatBonusKind::Agility => &mut base.agility,
            StatBonusKind::Intellect => &mut base.intellect,
            StatBonusKind::AttackPower => &mut base.attack_power,
            StatBonusKind::AbilityPower => &mut base.ability_power,
            StatBonusKind::PhysCritChance => &mut base.physical_crit_chance,
            StatBonusKind::MagicCritChance => &mut base.magical_crit_chance,
            StatBonusKind::Armor => &mut base.physical_defense,
            StatBonusKind::MagicArmor => &mut base.magical_defense,
            StatBonusKind::Block => &mut base.physical_block_power,
            StatBonusKind::Dodge => &mut base.dodge_chance,
            StatBonusKind::Speed => &mut base.speed,
        };
        *field += value;
    }
}

impl<S: StatSource> StatSource for [S] {
    fn apply(&self, base: &mut BaseStats) {
        for source in self {
            source.apply(base);
        }
    }
}

impl UnitTemplate {
    /// Copy of this template with the given sources folded into its base stats
    pub fn with_bonuses<S: StatSource + ?Sized>(&self, sources: &S) -> UnitTemplate {
        let mut template = self.clone();
        sources.apply(&mut template.base);
        template
    }
}
