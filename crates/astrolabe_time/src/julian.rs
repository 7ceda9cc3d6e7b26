//! Julian Day numbers tagged with their time scale.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 7.
//! Proleptic Gregorian throughout; there is no Julian-calendar branch.

use serde::{Deserialize, Serialize};

use crate::delta_t::delta_t_seconds;
use crate::instant::Instant;

/// Julian Date of J2000.0 (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Time scale a Julian Day is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeScale {
    /// Universal Time.
    Ut,
    /// Terrestrial Time.
    Tt,
}

/// A Julian Day on an explicit time scale.
///
/// UT and TT days are never interchangeable: the only way from one to the
/// other is [`JulianDay::to_tt`], which applies a ΔT correction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JulianDay {
    value: f64,
    scale: TimeScale,
}

impl JulianDay {
    pub fn ut(value: f64) -> Self {
        Self {
            value,
            scale: TimeScale::Ut,
        }
    }

    pub fn tt(value: f64) -> Self {
        Self {
            value,
            scale: TimeScale::Tt,
        }
    }

    pub fn value(self) -> f64 {
        self.value
    }

    pub fn scale(self) -> TimeScale {
        self.scale
    }

    /// Shift a UT day to TT by `delta_t_s` seconds. TT days are returned as is.
    pub fn to_tt(self, delta_t_s: f64) -> Self {
        match self.scale {
            TimeScale::Ut => Self::tt(self.value + delta_t_s / SECONDS_PER_DAY),
            TimeScale::Tt => self,
        }
    }

    /// Julian centuries since J2000.0 on this day's own scale.
    pub fn centuries_since_j2000(self) -> f64 {
        centuries_since_j2000(self.value)
    }
}

/// Julian Date from a proleptic Gregorian date with fractional day.
///
/// `year` is astronomical (1 BCE = 0). Months <= 2 are counted as months 13
/// and 14 of the previous year.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_frac + b - 1524.5
}

/// Julian Day (UT) of a validated instant.
pub fn julian_day_ut(instant: &Instant) -> JulianDay {
    let date = instant.date();
    let day_frac = date.day() as f64 + instant.day_fraction();
    JulianDay::ut(calendar_to_jd(date.astronomical_year(), date.month(), day_frac))
}

/// Julian Day (TT) of an instant, using the modelled ΔT for its year.
pub fn julian_day_tt(instant: &Instant) -> JulianDay {
    let dt = delta_t_seconds(instant.date().astronomical_year());
    julian_day_ut(instant).to_tt(dt)
}

/// Julian centuries since J2000.0: `(jd - 2451545.0) / 36525`.
///
/// Scale-agnostic; the caller passes whichever scale the consuming formula
/// expects.
pub fn centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}
