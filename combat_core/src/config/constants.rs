//! Combat constants configuration

use serde::{Deserialize, Serialize};

/// Tunable encounter constants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatConstants {
    /// Actions the player may take per turn
    #[serde(default = "default_max_player_actions")]
    pub max_player_actions: u32,
    /// Experience handed out on victory
    #[serde(default = "default_victory_experience")]
    pub victory_experience: u32,
    #[serde(default)]
    pub block: BlockRules,
    #[serde(default)]
    pub mitigation: MitigationRules,
}

impl Default for CombatConstants {
    fn default() -> Self {
        CombatConstants {
            max_player_actions: default_max_player_actions(),
            victory_experience: default_victory_experience(),
            block: BlockRules::default(),
            mitigation: MitigationRules::default(),
        }
    }
}

fn default_max_player_actions() -> u32 {
    2
}
fn default_victory_experience() -> u32 {
    10
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockRules {
    /// Whether absorbing a hit drains the block pool at all
    #[serde(default = "default_consume_block")]
    pub consume_block: bool,
    /// Drain only the absorbed amount instead of the whole pool
    #[serde(default)]
    pub block_can_be_split: bool,
}

impl Default for BlockRules {
    fn default() -> Self {
        BlockRules {
            consume_block: true,
            block_can_be_split: false,
        }
    }
}

fn default_consume_block() -> bool {
    true
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MitigationRules {
    /// Mitigation is spent by the first hit it reduces
    #[serde(default)]
    pub consume_mitigation: bool,
}
