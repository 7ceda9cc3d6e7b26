//! Greenwich Mean Sidereal Time and Local Sidereal Time, in degrees.
//!
//! GMST uses the Meeus form anchored at the preceding 0h: the sidereal time
//! at 0h plus the elapsed hours scaled by the sidereal rate.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 12.

use crate::julian::{DAYS_PER_CENTURY, J2000_JD};

/// Ratio of sidereal to solar time.
const SIDEREAL_RATE: f64 = 1.002_737_909_3;

/// Greenwich Mean Sidereal Time in degrees, [0, 360).
///
/// `JD0` is `jd` floored to the preceding 0h, `T0` its centuries since
/// J2000.0 and `H` the hours elapsed since `JD0`:
///
/// `GMST_h = 6.697374558 + 2400.051336·T0 + 0.000025862·T0² + 1.0027379093·H`
pub fn greenwich_mean_sidereal_time_deg(jd: f64) -> f64 {
    let jd0 = (jd - 0.5).floor() + 0.5;
    let t0 = (jd0 - J2000_JD) / DAYS_PER_CENTURY;
    let h = (jd - jd0) * 24.0;

    let gmst_hours = 6.697_374_558 + 2400.051_336 * t0 + 0.000_025_862 * t0 * t0 + SIDEREAL_RATE * h;
    wrap_360(gmst_hours.rem_euclid(24.0) * 15.0)
}

/// Local Sidereal Time in degrees, [0, 360).
///
/// `longitude_deg` is east-positive.
pub fn local_sidereal_time_deg(jd: f64, longitude_deg: f64) -> f64 {
    wrap_360((greenwich_mean_sidereal_time_deg(jd) + longitude_deg).rem_euclid(360.0))
}

// rem_euclid can round up to the modulus for tiny negative remainders.
fn wrap_360(deg: f64) -> f64 {
    if deg >= 360.0 { 0.0 } else { deg }
}
