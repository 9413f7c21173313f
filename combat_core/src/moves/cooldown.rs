//! Per-move cooldown counter

use serde::{Deserialize, Serialize};

/// Turns left before a move can be selected again
///
/// Putting a move on cooldown for `n` turns stores `n + 1`, because the owner's
/// next turn start decrements the counter before it can choose a move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CooldownTracker {
    remaining: u32,
}

impl CooldownTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_on_cooldown(&mut self, turns: u32) {
        self.remaining = turns.saturating_add(1);
    }

    pub fn decrease(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    pub fn is_on_cooldown(&self) -> bool {
        self.remaining > 0
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn reset(&mut self) {
        self.remaining = 0;
    }
}
