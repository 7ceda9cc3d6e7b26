//! Shared angle helpers.

/// Normalize an angle to [0, 360) degrees.
///
/// Non-finite input is returned unchanged (NaN stays NaN).
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360.0
    if r >= 360.0 { 0.0 } else { r }
}

/// Forward arc from `a` to `b` in degrees, [0, 360).
pub fn arc_forward(a: f64, b: f64) -> f64 {
    normalize_360(b - a)
}
