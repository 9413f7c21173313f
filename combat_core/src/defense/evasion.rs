//! Evasion - Percentile dodge rolls
//!
//! Rolls are whole numbers in `[0, 100)`, compared against a chance stored as
//! a fraction. A 5% dodge chance therefore succeeds on rolls 0 through 4.

use rand::Rng;

/// Roll a percentile die against a fractional chance
pub fn roll_percent(chance: f64, rng: &mut impl Rng) -> bool {
    let roll: u32 = rng.gen_range(0..100);
    f64::from(roll) < chance * 100.0
}

/// Whether a physical hit is dodged outright
pub fn roll_dodge(dodge_chance: f64, rng: &mut impl Rng) -> bool {
    let dodged = roll_percent(dodge_chance, rng);
    if dodged {
        tracing::debug!(dodge_chance, "attack dodged");
    }
    dodged
}
