//! Frame conversion helpers for chart computations.
//!
//! Provides the mean obliquity of the ecliptic (IAU 2006 and IAU 1980) and
//! the rotation of apparent equatorial coordinates into the ecliptic frame
//! of date.

pub mod obliquity;
pub mod rotation;
pub mod spherical;

pub use obliquity::{
    OBLIQUITY_J2000_DEG, mean_obliquity_deg, mean_obliquity_iau1980_deg,
    mean_obliquity_iau2006_arcsec,
};
pub use rotation::{equatorial_to_ecliptic_of_date, rotate_equatorial_to_ecliptic};
pub use spherical::{EclipticCoord, EquatorialCoord, unit_vector_to_spherical};
