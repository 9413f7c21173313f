//! Percentage mitigation

/// Scale damage by the unmitigated fraction
///
/// Rounding is left to the caller.
pub fn apply_mitigation(damage: f64, fraction: f64) -> f64 {
    damage * (1.0 - fraction)
}
