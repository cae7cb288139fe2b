//! Rounding helpers for reported figures
//!
//! Monthly figures are reported as whole currency units, rounding halves
//! upward. Capital reserves are reported to one decimal place, rounding
//! the exact stored value, with exact halves going away from zero.

/// Round to the nearest integer, halves toward positive infinity
///
/// `round_half_up(2.5) == 3.0` and `round_half_up(-2.5) == -2.0`.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Round to one decimal place, halves away from zero
///
/// Rounds the exact binary value, so a double stored just below a `.x5`
/// boundary (38250 × 6 / 10000 is stored as 22.94999…) rounds down.
pub fn round_to_tenth(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let magnitude = value.abs();
    let whole = magnitude.floor();
    let fraction = magnitude - whole;
    let mut tenths = (fraction * 10.0).floor();
    // Fused remainder keeps the sign of the exact fraction * 10 - (tenths + 0.5)
    if fraction.mul_add(10.0, -(tenths + 0.5)) >= 0.0 {
        tenths += 1.0;
    }
    let rounded = (whole * 10.0 + tenths) / 10.0;
    if value < 0.0 {
        -rounded
    } else {
        rounded
    }
}
