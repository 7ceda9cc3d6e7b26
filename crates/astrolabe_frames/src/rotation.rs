//! Rotation from the true equator of date to the mean ecliptic of date.
//!
//! A single rotation by +ε about the x-axis (vernal equinox direction):
//!
//! ```text
//! x' =  x
//! y' =  y cos ε + z sin ε
//! z' = -y sin ε + z cos ε
//! ```
//!
//! Mean obliquity only: no nutation, aberration or parallax. Accuracy is
//! bounded at roughly one arcminute.

use crate::obliquity::mean_obliquity_deg;
use crate::spherical::{EclipticCoord, EquatorialCoord, unit_vector_to_spherical};

/// Rotate an equatorial vector into the ecliptic frame for obliquity `eps_deg`.
#[inline]
pub fn rotate_equatorial_to_ecliptic(v: &[f64; 3], eps_deg: f64) -> [f64; 3] {
    let (sin_e, cos_e) = eps_deg.to_radians().sin_cos();
    [
        v[0],
        cos_e * v[1] + sin_e * v[2],
        -sin_e * v[1] + cos_e * v[2],
    ]
}

/// Ecliptic longitude/latitude of date from apparent RA/Dec.
///
/// The obliquity is the IAU 2006 mean obliquity at `jd_tt` unless
/// `eps_override_deg` is given.
pub fn equatorial_to_ecliptic_of_date(
    eq: EquatorialCoord,
    jd_tt: f64,
    eps_override_deg: Option<f64>,
) -> EclipticCoord {
    let eps = eps_override_deg.unwrap_or_else(|| mean_obliquity_deg(jd_tt));
    let ecl = rotate_equatorial_to_ecliptic(&eq.to_unit_vector(), eps);
    let (lon_deg, lat_deg) = unit_vector_to_spherical(&ecl);
    EclipticCoord { lon_deg, lat_deg }
}
