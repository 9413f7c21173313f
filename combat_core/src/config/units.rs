//! Unit template loading

use super::ConfigError;
use crate::stats::{UnitLibrary, UnitTemplate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Container for unit templates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitsConfig {
    #[serde(rename = "units")]
    pub units: Vec<UnitTemplate>,
}

/// Load unit templates from a TOML file
pub fn load_unit_library(path: &Path) -> Result<UnitLibrary, ConfigError> {
    let config: UnitsConfig = super::load_toml(path)?;
    build_library(config)
}

/// Load unit templates from a TOML string
pub fn parse_unit_library(content: &str) -> Result<UnitLibrary, ConfigError> {
    let config: UnitsConfig = super::parse_toml(content)?;
    build_library(config)
}

/// Units shipped with the crate
pub fn default_units() -> Result<UnitLibrary, ConfigError> {
    parse_unit_library(include_str!("../../config/units.toml"))
}

fn build_library(config: UnitsConfig) -> Result<UnitLibrary, ConfigError> {
    let mut library = UnitLibrary::new();
    for template in config.units {
        if template.base.max_hp <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "unit '{}' must have positive max_hp",
                template.id
            )));
        }
        let id = template.id.clone();
        if library.insert(template).is_some() {
            return Err(ConfigError::ValidationError(format!(
                "duplicate unit id '{}'",
                id
            )));
        }
    }
    Ok(library)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UnitKind;

    #[test]
    fn test_parse_units_with_defaults() {
        let toml = r#"
[[units]]
id = "rat"
name = "Rat"
kind = "enemy"
moves = ["claw"]

[units.base]
max_hp = 12
speed = 3
"#;

        let library = parse_unit_library(toml).unwrap();
        let rat = library.get("rat").unwrap();
        assert_eq!(rat.kind, UnitKind::Enemy);
        assert_eq!(rat.moves, vec!["claw".to_string()]);
        assert!((rat.base.max_hp - 12.0).abs() < f64::EPSILON);
        assert!((rat.ratios.strength_ap_ratio - 2.0).abs() < f64::EPSILON);
        assert!((rat.growth.magical_defense - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_hp_rejected() {
        let toml = r#"
[[units]]
id = "ghost"
name = "Ghost"
kind = "enemy"
"#;
        assert!(matches!(
            parse_unit_library(toml),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_default_units_load() {
        let library = default_units().unwrap();
        assert!(library.get("hero").is_some_and(|u| u.is_player()));
        assert!(library.require("wolf").is_ok());
        assert!(matches!(
            library.require("dragon"),
            Err(ConfigError::UnknownUnit(_))
        ));
    }
}
