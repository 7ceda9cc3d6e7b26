//! Geographic observer location.

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Observer location on the Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl GeoLocation {
    /// Validate and create a location.
    ///
    /// The poles are accepted: the Ascendant formula stays finite there.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, ChartError> {
        if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(ChartError::invalid(
                "latitude",
                format!("{latitude_deg} is not in [-90, 90]"),
            ));
        }
        if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(ChartError::invalid(
                "longitude",
                format!("{longitude_deg} is not in [-180, 180]"),
            ));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_range_edges() {
        assert!(GeoLocation::new(90.0, 180.0).is_ok());
        assert!(GeoLocation::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(GeoLocation::new(90.5, 0.0).unwrap_err().field(), "latitude");
        assert_eq!(GeoLocation::new(0.0, -180.1).unwrap_err().field(), "longitude");
    }

    #[test]
    fn rejects_non_finite() {
        assert_eq!(GeoLocation::new(f64::NAN, 0.0).unwrap_err().field(), "latitude");
        assert_eq!(GeoLocation::new(0.0, f64::INFINITY).unwrap_err().field(), "longitude");
    }

    #[test]
    fn radians() {
        let loc = GeoLocation::new(28.6139, 77.209).unwrap();
        assert!((loc.latitude_rad() - 28.6139_f64.to_radians()).abs() < 1e-15);
        assert!((loc.longitude_rad() - 77.209_f64.to_radians()).abs() < 1e-15);
    }
}
