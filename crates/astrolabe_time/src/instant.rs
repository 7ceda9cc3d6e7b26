//! Civil calendar dates and UTC instants.
//!
//! Dates in the common era are backed by [`chrono::NaiveDate`]. Dates before
//! the calendar epoch are kept as a plain `(year, month, day)` triple: the
//! ephemeris provider addresses them with a literal such as
//! `bc 0044-Mar-15`, and they are never handed to a calendar library.
//!
//! All calendar arithmetic is proleptic Gregorian.

use std::fmt::{Display, Formatter};

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;

/// Three-letter English month abbreviations, January first.
pub const MONTH_ABBREVS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Month number (1-12) from a three-letter abbreviation, case-insensitive.
pub fn month_from_abbrev(abbrev: &str) -> Option<u32> {
    MONTH_ABBREVS
        .iter()
        .position(|m| m.eq_ignore_ascii_case(abbrev))
        .map(|i| i as u32 + 1)
}

/// Abbreviation for a month number (1-12).
///
/// Out-of-range months yield `"???"`; validated dates never reach that arm.
pub fn month_abbrev(month: u32) -> &'static str {
    match month {
        1..=12 => MONTH_ABBREVS[(month - 1) as usize],
        _ => "???",
    }
}

/// Calendar era of a civil date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Era {
    /// Common era (year 1 and later).
    Ad,
    /// Before the common era.
    Bce,
}

/// A civil calendar date, tagged by era.
///
/// Only built through [`CivilDate::ad`], [`CivilDate::bce`] or
/// [`CivilDate::parse`], so every value names a day that exists. Serialized
/// as its literal (`1984-08-18`, `bc 0044-Mar-15`) and re-parsed on the way in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CivilDate(DateRepr);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum DateRepr {
    Ad(NaiveDate),
    /// `year` counts backwards from 1 (`bc 0044` is year 44, astronomical year -43).
    Bce { year: u32, month: u32, day: u32 },
}

impl CivilDate {
    /// Common-era date from components.
    pub fn ad(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        if year < 1 {
            return Err(TimeError::invalid("year", format!("{year} is not a common-era year")));
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .map(|d| Self(DateRepr::Ad(d)))
            .ok_or_else(|| {
                TimeError::invalid("date", format!("{year:04}-{month:02}-{day:02} does not exist"))
            })
    }

    /// BCE date from components (`year` >= 1, counted backwards).
    pub fn bce(year: u32, month: u32, day: u32) -> Result<Self, TimeError> {
        if year == 0 {
            return Err(TimeError::invalid("year", "there is no year 0 BCE"));
        }
        if !(1..=12).contains(&month) {
            return Err(TimeError::invalid("month", format!("{month} is not in 1..=12")));
        }
        let astro_year = 1 - year as i64;
        let max_day = days_in_month(astro_year, month);
        if day == 0 || day > max_day {
            return Err(TimeError::invalid(
                "day",
                format!("{day} is not in 1..={max_day} for bc {year:04}-{}", month_abbrev(month)),
            ));
        }
        Ok(Self(DateRepr::Bce { year, month, day }))
    }

    /// Parse `YYYY-MM-DD` or the provider literal `bc YYYY-Mon-DD`.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let s = s.trim();
        match strip_bce_prefix(s) {
            Some(rest) => parse_bce_literal(rest),
            None => NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map_err(|e| TimeError::invalid("date", format!("'{s}': {e}")))
                .and_then(|d| Self::ad(d.year(), d.month(), d.day())),
        }
    }

    pub fn era(&self) -> Era {
        match self.0 {
            DateRepr::Ad(_) => Era::Ad,
            DateRepr::Bce { .. } => Era::Bce,
        }
    }

    /// Astronomical year numbering: 1 BCE is year 0, 2 BCE is year -1.
    pub fn astronomical_year(&self) -> i32 {
        match self.0 {
            DateRepr::Ad(d) => d.year(),
            DateRepr::Bce { year, .. } => 1 - year as i32,
        }
    }

    pub fn month(&self) -> u32 {
        match self.0 {
            DateRepr::Ad(d) => d.month(),
            DateRepr::Bce { month, .. } => month,
        }
    }

    pub fn day(&self) -> u32 {
        match self.0 {
            DateRepr::Ad(d) => d.day(),
            DateRepr::Bce { day, .. } => day,
        }
    }

    /// Chrono date, only for the common era.
    pub fn naive(&self) -> Option<NaiveDate> {
        match self.0 {
            DateRepr::Ad(d) => Some(d),
            DateRepr::Bce { .. } => None,
        }
    }
}

impl Display for CivilDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            DateRepr::Ad(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            DateRepr::Bce { year, month, day } => {
                write!(f, "bc {year:04}-{}-{day:02}", month_abbrev(month))
            }
        }
    }
}

impl TryFrom<String> for CivilDate {
    type Error = TimeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<CivilDate> for String {
    fn from(d: CivilDate) -> Self {
        d.to_string()
    }
}

/// A UTC instant on the civil calendar. Timezones are resolved upstream.
///
/// Fields are private so that every instant has passed [`Instant::new`];
/// deserialization goes through the same check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "InstantFields", into = "InstantFields")]
pub struct Instant {
    date: CivilDate,
    hour: u32,
    minute: u32,
    second: f64,
}

/// Wire shape of an [`Instant`].
#[derive(Clone, Copy, Serialize, Deserialize)]
struct InstantFields {
    date: CivilDate,
    hour: u32,
    minute: u32,
    #[serde(default)]
    second: f64,
}

impl TryFrom<InstantFields> for Instant {
    type Error = TimeError;

    fn try_from(f: InstantFields) -> Result<Self, Self::Error> {
        Self::new(f.date, f.hour, f.minute, f.second)
    }
}

impl From<Instant> for InstantFields {
    fn from(i: Instant) -> Self {
        Self {
            date: i.date,
            hour: i.hour,
            minute: i.minute,
            second: i.second,
        }
    }
}

impl Instant {
    /// Validate and build an instant.
    pub fn new(date: CivilDate, hour: u32, minute: u32, second: f64) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::invalid("hour", format!("{hour} is not in 0..=23")));
        }
        if minute > 59 {
            return Err(TimeError::invalid("minute", format!("{minute} is not in 0..=59")));
        }
        if !second.is_finite() || !(0.0..60.0).contains(&second) {
            return Err(TimeError::invalid("second", format!("{second} is not in [0, 60)")));
        }
        Ok(Self {
            date,
            hour,
            minute,
            second,
        })
    }

    /// Parse a date literal and an `HH:MM[:SS]` time.
    pub fn parse(date: &str, time: &str) -> Result<Self, TimeError> {
        let date = CivilDate::parse(date)?;
        let (hour, minute, second) = parse_time_of_day(time)?;
        Self::new(date, hour, minute, second)
    }

    /// Common-era instant from a chrono date-time (sub-second precision kept).
    pub fn from_naive(dt: NaiveDateTime) -> Result<Self, TimeError> {
        let date = CivilDate::ad(dt.year(), dt.month(), dt.day())?;
        let second = dt.second() as f64 + dt.nanosecond().min(999_999_999) as f64 * 1e-9;
        Self::new(date, dt.hour(), dt.minute(), second)
    }

    /// Chrono representation, only for common-era instants.
    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        let d = self.date.naive()?;
        let whole = self.second.floor();
        let nanos = ((self.second - whole) * 1e9).round().min(999_999_999.0) as u32;
        d.and_hms_nano_opt(self.hour, self.minute, whole as u32, nanos)
    }

    pub fn date(&self) -> CivilDate {
        self.date
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Seconds within the minute, in [0, 60).
    pub fn second(&self) -> f64 {
        self.second
    }

    /// Fraction of the day elapsed, in [0, 1).
    pub fn day_fraction(&self) -> f64 {
        (self.hour as f64 + (self.minute as f64 + self.second / 60.0) / 60.0) / 24.0
    }
}

impl Display for Instant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        if (self.second - whole as f64).abs() < 1e-9 {
            write!(f, "{} {:02}:{:02}:{:02}", self.date, self.hour, self.minute, whole)
        } else {
            write!(f, "{} {:02}:{:02}:{:09.6}", self.date, self.hour, self.minute, self.second)
        }
    }
}

/// Parse `HH:MM` or `HH:MM:SS` into `(hour, minute, second)`.
///
/// Only the syntax is checked here; ranges are checked by [`Instant::new`].
pub fn parse_time_of_day(s: &str) -> Result<(u32, u32, f64), TimeError> {
    let s = s.trim();
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 2 && parts.len() != 3 {
        return Err(TimeError::invalid("time", format!("'{s}' is not HH:MM or HH:MM:SS")));
    }
    let hour = parts[0]
        .parse::<u32>()
        .map_err(|_| TimeError::invalid("time", format!("bad hour in '{s}'")))?;
    let minute = parts[1]
        .parse::<u32>()
        .map_err(|_| TimeError::invalid("time", format!("bad minute in '{s}'")))?;
    let second = match parts.get(2) {
        Some(p) => p
            .parse::<f64>()
            .map_err(|_| TimeError::invalid("time", format!("bad second in '{s}'")))?,
        None => 0.0,
    };
    Ok((hour, minute, second))
}

/// Remainder after a case-insensitive `bc ` prefix, if present.
pub(crate) fn strip_bce_prefix(s: &str) -> Option<&str> {
    let head = s.get(..3)?;
    head.eq_ignore_ascii_case("bc ").then(|| &s[3..])
}

/// Parse the `YYYY-Mon-DD` body of a BCE literal by hand.
fn parse_bce_literal(body: &str) -> Result<CivilDate, TimeError> {
    let bad = || TimeError::invalid("date", format!("'bc {body}' is not bc YYYY-Mon-DD"));
    let mut parts = body.trim().split('-');
    let (Some(y), Some(m), Some(d), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(bad());
    };
    if y.len() != 4 || !y.bytes().all(|b| b.is_ascii_digit()) {
        return Err(bad());
    }
    if d.len() != 2 || !d.bytes().all(|b| b.is_ascii_digit()) {
        return Err(bad());
    }
    let year = y.parse::<u32>().map_err(|_| bad())?;
    let month = month_from_abbrev(m).ok_or_else(bad)?;
    let day = d.parse::<u32>().map_err(|_| bad())?;
    CivilDate::bce(year, month, day)
}

fn is_leap_year(astro_year: i64) -> bool {
    astro_year.rem_euclid(4) == 0 && (astro_year.rem_euclid(100) != 0 || astro_year.rem_euclid(400) == 0)
}

fn days_in_month(astro_year: i64, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ if is_leap_year(astro_year) => 29,
        _ => 28,
    }
}
