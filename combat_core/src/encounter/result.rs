//! EncounterResult - What the surrounding game receives on victory

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EncounterResult {
    pub experience_gained: u32,
    /// Player HP at the end of the fight
    pub player_hp: f64,
}
