//! Configuration loading from TOML files

mod constants;
mod moves;
mod units;

pub use constants::{BlockRules, CombatConstants, MitigationRules};
pub use moves::{default_moves, load_move_library, parse_move_library};
pub use units::{default_units, load_unit_library, parse_unit_library};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
    #[error("Unknown move: {0}")]
    UnknownMove(String),
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Constants shipped with the crate
pub fn default_constants() -> CombatConstants {
    let toml = include_str!("../../config/constants.toml");
    parse_toml(toml).unwrap_or_default()
}
