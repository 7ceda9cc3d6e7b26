//! Convenience wrapper for the astrolabe chart engine.
//!
//! Accepts civil dates and raw provider observations directly and runs them
//! through the time, frame and chart crates.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use astrolabe_rs::*;
//!
//! let request = ChartRequest {
//!     date: "1984-08-18".into(),
//!     time: "08:03:00".into(),
//!     latitude: 28.078611,
//!     longitude: -80.602778,
//!     house_system: Some("placidus".into()),
//! };
//! let chart = compute_house_chart(&request, &ChartConfig::default())?;
//! println!("Ascendant: {}", chart.ascendant_position);
//! ```

pub mod body;
pub mod chart;
pub mod config;
pub mod error;
pub mod horizons;
pub mod positions;
pub mod provider;

pub use body::{ALL_BODIES, Body, CHART_BODIES};
pub use chart::{ChartRequest, HouseChart, compute_house_chart, compute_house_chart_for_place};
pub use config::ChartConfig;
pub use error::AstrolabeError;
pub use horizons::{DEFAULT_STEP, GEOCENTER, horizons_query, is_date_rejection, parse_observer_table};
pub use positions::{BodyObservation, BodyPosition, compute_body_positions, positions_from_provider};
pub use provider::{EphemerisProvider, Geocoder, ProviderError, ProviderRow};

// Re-export core types so callers don't need to depend on the leaf crates.
pub use astrolabe_chart::{
    AspectSummary, ChartAngles, Dms, GeoLocation, HouseCusps, HouseSystem, ZodiacPosition,
    ZodiacSign, calculate_aspects, compute_house_cusps, deg_to_dms, ecliptic_to_zodiac,
    house_of_longitude,
};
pub use astrolabe_frames::{EclipticCoord, EquatorialCoord, equatorial_to_ecliptic_of_date};
pub use astrolabe_time::{
    CivilDate, DeltaTPolicy, Era, Instant, JulianDay, ProviderWindow, TimeScale, delta_t_seconds,
    greenwich_mean_sidereal_time_deg, julian_day_tt, julian_day_ut,
};
