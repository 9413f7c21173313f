//! Turn order

mod scheduler;

pub use scheduler::{InitiativeScheduler, TurnEntry};
