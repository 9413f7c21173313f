//! Combat resolution - apply damage and heals to units

mod resolution;
mod result;

pub use resolution::{apply_incoming_damage, apply_true_damage, heal};
pub use result::CombatOutcome;
