//! Mean obliquity of the ecliptic.
//!
//! Two models are kept side by side. The IAU 2006 polynomial is used when
//! rotating apparent equatorial coordinates into the ecliptic of date. The
//! older IAU 1980 polynomial is the one the house pipeline feeds to the
//! angle calculator; its Ascendant/MC calibration offsets were fitted
//! against it.
//!
//! Source: Capitaine, Wallace & Chapront 2003 (IAU 2006, P03 model);
//! Lieske et al. 1977 (IAU 1980). Public domain (IAU standard).

use astrolabe_time::centuries_since_j2000;

/// Mean obliquity at J2000.0 under IAU 2006, in degrees (84381.406″).
pub const OBLIQUITY_J2000_DEG: f64 = 84_381.406 / 3600.0;

/// IAU 2006 mean obliquity in arcseconds.
///
/// # Arguments
/// * `t` - Julian centuries of TT since J2000.0
pub fn mean_obliquity_iau2006_arcsec(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    84_381.406 - 46.836_769 * t - 0.000_183_1 * t2 + 0.002_003_40 * t3 - 5.76e-7 * t4
        - 4.34e-8 * t5
}

/// IAU 2006 mean obliquity in degrees for a Julian Day on the TT scale.
pub fn mean_obliquity_deg(jd_tt: f64) -> f64 {
    mean_obliquity_iau2006_arcsec(centuries_since_j2000(jd_tt)) / 3600.0
}

/// IAU 1980 mean obliquity in degrees.
///
/// `t` is Julian centuries of TT since J2000.0.
pub fn mean_obliquity_iau1980_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    23.439_291_111 + (-46.815_0 * t - 0.000_59 * t2 + 0.001_813 * t3) / 3600.0
}
