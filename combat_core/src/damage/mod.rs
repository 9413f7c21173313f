//! Damage system - outgoing damage rolls

mod calculation;

pub use calculation::{roll_outgoing_damage, OutgoingDamage};
