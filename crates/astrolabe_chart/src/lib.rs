//! Chart angles, house cusps and zodiac decomposition.
//!
//! This crate provides:
//! - Ascendant/MC from local sidereal time, with calibration offsets
//! - Placidus (approximate), Equal, Whole-Sign and Koch (approximate) cusps
//! - Zodiac sign and truncated DMS decomposition of ecliptic longitudes
//! - Geographic location validation
//!
//! All functions are pure; callers compute sidereal time and obliquity
//! upstream.

pub mod angles;
pub mod aspects;
pub mod error;
pub mod house_types;
pub mod houses;
pub mod location;
pub mod util;
pub mod zodiac;

pub use angles::{
    ASCENDANT_CALIBRATION_DEG, ChartAngles, MIDHEAVEN_CALIBRATION_DEG, ascendant_deg,
    midheaven_deg,
};
pub use aspects::{ASPECTS_UNAVAILABLE, Aspect, AspectSummary, calculate_aspects};
pub use error::ChartError;
pub use house_types::{ALL_HOUSE_SYSTEMS, HouseCusps, HouseSystem};
pub use houses::{compute_house_cusps, house_of_longitude};
pub use location::GeoLocation;
pub use util::{arc_forward, normalize_360};
pub use zodiac::{
    ALL_SIGNS, Dms, Element, Modality, ZodiacPosition, ZodiacSign, deg_to_dms, ecliptic_to_zodiac,
};
