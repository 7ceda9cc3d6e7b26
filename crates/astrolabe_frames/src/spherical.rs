//! Equatorial and ecliptic coordinate types, and unit-vector conversion.

use serde::{Deserialize, Serialize};

/// Apparent geocentric equatorial coordinates, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquatorialCoord {
    /// Right ascension. Not required to be pre-normalized.
    pub ra_deg: f64,
    /// Declination, [-90, 90].
    pub dec_deg: f64,
}

impl EquatorialCoord {
    pub fn new(ra_deg: f64, dec_deg: f64) -> Self {
        Self { ra_deg, dec_deg }
    }

    /// Unit vector `(cos δ cos α, cos δ sin α, sin δ)`.
    pub fn to_unit_vector(self) -> [f64; 3] {
        let (sin_ra, cos_ra) = self.ra_deg.to_radians().sin_cos();
        let (sin_dec, cos_dec) = self.dec_deg.to_radians().sin_cos();
        [cos_dec * cos_ra, cos_dec * sin_ra, sin_dec]
    }
}

/// Ecliptic coordinates of date, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EclipticCoord {
    /// Longitude, range [0, 360).
    pub lon_deg: f64,
    /// Latitude, range [-90, 90].
    pub lat_deg: f64,
}

/// Longitude/latitude in degrees of a unit vector.
///
/// Longitude is measured in the x-y plane from +x toward +y and lands in
/// [0, 360). The z component is clamped to [-1, 1] before `asin`, so
/// rounding error in a rotated vector never produces NaN.
pub fn unit_vector_to_spherical(v: &[f64; 3]) -> (f64, f64) {
    let lon = v[1].atan2(v[0]).to_degrees().rem_euclid(360.0);
    let lat = v[2].clamp(-1.0, 1.0).asin().to_degrees();
    // rem_euclid can round a tiny negative up to exactly 360.0
    let lon = if lon >= 360.0 { 0.0 } else { lon };
    (lon, lat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_vector_axes() {
        let v = EquatorialCoord::new(0.0, 0.0).to_unit_vector();
        assert!((v[0] - 1.0).abs() < 1e-15 && v[1].abs() < 1e-15 && v[2].abs() < 1e-15);

        let v = EquatorialCoord::new(90.0, 0.0).to_unit_vector();
        assert!(v[0].abs() < 1e-15 && (v[1] - 1.0).abs() < 1e-15);

        let v = EquatorialCoord::new(123.0, 90.0).to_unit_vector();
        assert!((v[2] - 1.0).abs() < 1e-15);
    }

    #[test]
    fn spherical_negative_y_wraps() {
        let (lon, lat) = unit_vector_to_spherical(&[0.0, -1.0, 0.0]);
        assert!((lon - 270.0).abs() < 1e-12, "lon = {lon}");
        assert!(lat.abs() < 1e-12);
    }

    #[test]
    fn spherical_clamps_overshoot() {
        let (_, lat) = unit_vector_to_spherical(&[0.0, 0.0, 1.000_000_000_000_1]);
        assert_eq!(lat, 90.0);
        let (_, lat) = unit_vector_to_spherical(&[0.0, 0.0, -1.000_000_000_000_1]);
        assert_eq!(lat, -90.0);
    }

    #[test]
    fn spherical_tiny_negative_longitude() {
        let (lon, _) = unit_vector_to_spherical(&[1.0, -1e-300, 0.0]);
        assert!((0.0..360.0).contains(&lon), "lon = {lon}");
    }

    #[test]
    fn unnormalized_ra_gives_same_vector() {
        let a = EquatorialCoord::new(-30.0, 10.0).to_unit_vector();
        let b = EquatorialCoord::new(330.0, 10.0).to_unit_vector();
        for i in 0..3 {
            assert!((a[i] - b[i]).abs() < 1e-12);
        }
    }
}
