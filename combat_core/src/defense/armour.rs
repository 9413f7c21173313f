//! Armour - Flat defense subtraction

/// Subtract flat defense from damage, never going below zero
pub fn apply_flat_defense(damage: f64, defense: f64) -> f64 {
    (damage - defense).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_defense() {
        assert!((apply_flat_defense(15.0, 3.0) - 12.0).abs() < f64::EPSILON);
        assert!(apply_flat_defense(2.0, 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_defense_adds_damage() {
        assert!((apply_flat_defense(10.0, -2.0) - 12.0).abs() < f64::EPSILON);
    }
}
