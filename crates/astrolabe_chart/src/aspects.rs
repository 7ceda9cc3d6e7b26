//! Aspect calculation placeholder.
//!
//! Only the result shape exists; no aspects are computed yet.

use serde::{Deserialize, Serialize};

/// Message returned while aspect calculation is unimplemented.
pub const ASPECTS_UNAVAILABLE: &str = "Aspect calculation is not yet implemented.";

/// An angular relationship between two chart points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    pub first: String,
    pub second: String,
    /// Aspect name, e.g. "trine".
    pub kind: String,
    /// Deviation from the exact angle, in degrees.
    pub orb_deg: f64,
}

/// Aspect result: a human-readable summary plus the aspect list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectSummary {
    pub summary: String,
    pub aspects: Vec<Aspect>,
}

/// Aspects between the given `(name, longitude)` points.
///
/// Always returns an empty list with [`ASPECTS_UNAVAILABLE`].
pub fn calculate_aspects(_points: &[(&str, f64)]) -> AspectSummary {
    AspectSummary {
        summary: ASPECTS_UNAVAILABLE.to_string(),
        aspects: Vec::new(),
    }
}
