//! Stat model - unit templates and level-scaled derived stats

mod bonus;
mod derived;
mod template;

pub use bonus::{StatBonus, StatBonusKind, StatSource};
pub use derived::DerivedStats;
pub use template::{BaseStats, StatGrowth, StatRatios, UnitTemplate};

/// Template ids indexed for lookup
#[derive(Debug, Clone, Default)]
pub struct UnitLibrary {
    units: std::collections::HashMap<String, UnitTemplate>,
}

impl UnitLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a template, returning the one it replaced
    pub fn insert(&mut self, template: UnitTemplate) -> Option<UnitTemplate> {
        self.units.insert(template.id.clone(), template)
    }

    pub fn get(&self, id: &str) -> Option<&UnitTemplate> {
        self.units.get(id)
    }

    /// Look up a template or fail with `UnknownUnit`
    pub fn require(&self, id: &str) -> Result<&UnitTemplate, crate::config::ConfigError> {
        self.get(id)
            .ok_or_else(|| crate::config::ConfigError::UnknownUnit(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &UnitTemplate> {
        self.units.values()
    }
}
