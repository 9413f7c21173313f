//! Move table loading

use super::ConfigError;
use crate::moves::{MoveLibrary, MoveTemplate};
use crate::types::{EffectKind, MoveCategory};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Container for move templates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovesConfig {
    #[serde(rename = "moves")]
    pub moves: Vec<MoveTemplate>,
}

/// Load move templates from a TOML file
pub fn load_move_library(path: &Path) -> Result<MoveLibrary, ConfigError> {
    let config: MovesConfig = super::load_toml(path)?;
    build_library(config)
}

/// Load move templates from a TOML string
pub fn parse_move_library(content: &str) -> Result<MoveLibrary, ConfigError> {
    let config: MovesConfig = super::parse_toml(content)?;
    build_library(config)
}

/// Moves shipped with the crate
pub fn default_moves() -> Result<MoveLibrary, ConfigError> {
    parse_move_library(include_str!("../../config/moves.toml"))
}

fn build_library(config: MovesConfig) -> Result<MoveLibrary, ConfigError> {
    let mut library = MoveLibrary::new();
    for template in config.moves {
        validate(&template)?;
        let id = template.id.clone();
        if library.insert(template).is_some() {
            return Err(ConfigError::ValidationError(format!(
                "duplicate move id '{}'",
                id
            )));
        }
    }
    Ok(library)
}

fn validate(template: &MoveTemplate) -> Result<(), ConfigError> {
    let effect_fits = match template.category {
        MoveCategory::Block => template.effect == EffectKind::Block,
        MoveCategory::Mitigate => matches!(
            template.effect,
            EffectKind::PhysMitigation | EffectKind::MagicMitigation | EffectKind::AllMitigation
        ),
        MoveCategory::Buff | MoveCategory::Debuff => template.effect != EffectKind::None,
        _ => true,
    };

    if !effect_fits {
        return Err(ConfigError::ValidationError(format!(
            "move '{}' of category {} cannot carry effect {}",
            template.id, template.category, template.effect
        )));
    }
    Ok(())
}
