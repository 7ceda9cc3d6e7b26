//! Civil time, Julian Day and sidereal-time primitives.
//!
//! This crate provides:
//! - `CivilDate`/`Instant`: validated UTC instants, including BCE dates
//! - Julian Day (UT and TT) and centuries since J2000.0
//! - ΔT as a year-banded calibration polynomial
//! - Greenwich and local mean sidereal time
//! - START/STOP literals for the external ephemeris provider

pub mod delta_t;
pub mod error;
pub mod instant;
pub mod julian;
pub mod sidereal;
pub mod window;

pub use delta_t::{DELTA_T_FALLBACK_S, DeltaTPolicy, PROVIDER_ROW_DELTA_T_S, delta_t_seconds};
pub use error::TimeError;
pub use instant::{CivilDate, Era, Instant, month_abbrev, month_from_abbrev, parse_time_of_day};
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, JulianDay, SECONDS_PER_DAY, TimeScale, calendar_to_jd,
    centuries_since_j2000, julian_day_tt, julian_day_ut,
};
pub use sidereal::{greenwich_mean_sidereal_time_deg, local_sidereal_time_deg};
pub use window::ProviderWindow;
