//! Deterministic horizontal jitter.
//!
//! The offset is a pure function of the observation value, so equal values
//! land on the same x and repeated layouts are pixel-identical without any
//! stored seed.

/// Spreads nearby values across the unit interval. Not a random source.
pub const JITTER_SPREAD: f64 = 123.45;

/// Clamp a caller-supplied strength into `[0, 1]`; NaN becomes `0`.
pub fn clamp_strength(strength: f64) -> f64 {
    if strength.is_nan() {
        0.0
    } else {
        strength.clamp(0.0, 1.0)
    }
}

/// Offset in the open interval `(-strength/2, strength/2)`.
pub fn jitter(value: f64, strength: f64) -> f64 {
    let strength = clamp_strength(strength);
    if strength == 0.0 {
        return 0.0;
    }

    let scaled = value * JITTER_SPREAD;
    if !scaled.is_finite() {
        return 0.0;
    }

    let frac = scaled - scaled.floor();
    // frac at either end of [0, 1) would put the point on the interval edge
    if !(frac > f64::EPSILON && frac < 1.0 - f64::EPSILON) {
        return 0.0;
    }

    (frac - 0.5) * strength
}
