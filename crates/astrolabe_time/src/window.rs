//! START/STOP time literals for the external ephemeris provider.
//!
//! The provider is asked for a one-minute window beginning at the chart
//! instant. Common-era windows are computed with chrono. BCE windows are
//! assembled from the literal `bc YYYY-Mon-DD HH:MM` with the minute rolled
//! over by hand, because calendar libraries reject those years.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::instant::{Era, Instant};

/// Primary common-era literal format.
const AD_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Common-era format retried when the provider rejects [`AD_FORMAT`].
const AD_FALLBACK_FORMAT: &str = "%Y-%b-%d %H:%M";

/// A provider query window: START and STOP time literals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderWindow {
    pub era: Era,
    pub start: String,
    pub stop: String,
    /// Alternate START/STOP pair; `None` for BCE windows.
    pub fallback: Option<(String, String)>,
}

impl ProviderWindow {
    /// One-minute window starting at `instant`.
    pub fn one_minute(instant: &Instant) -> Result<Self, TimeError> {
        match instant.date().era() {
            Era::Ad => ad_window(instant),
            Era::Bce => Ok(bce_window(instant)),
        }
    }

    /// The same window in the alternate format, if this era has one.
    pub fn fallback_window(&self) -> Option<Self> {
        let (start, stop) = self.fallback.clone()?;
        Some(Self {
            era: self.era,
            start,
            stop,
            fallback: None,
        })
    }
}

fn ad_window(instant: &Instant) -> Result<ProviderWindow, TimeError> {
    let start = instant
        .to_naive()
        .ok_or_else(|| TimeError::invalid("time", format!("{instant} has no calendar form")))?;
    let stop = start
        .checked_add_signed(Duration::minutes(1))
        .ok_or_else(|| TimeError::invalid("date", format!("{instant} is at the calendar limit")))?;
    Ok(ProviderWindow {
        era: Era::Ad,
        start: start.format(AD_FORMAT).to_string(),
        stop: stop.format(AD_FORMAT).to_string(),
        fallback: Some((
            start.format(AD_FALLBACK_FORMAT).to_string(),
            stop.format(AD_FALLBACK_FORMAT).to_string(),
        )),
    })
}

/// BCE windows carry minute precision only. The date part is copied
/// unchanged, so 23:59 rolls to 00:00 on the same literal date.
fn bce_window(instant: &Instant) -> ProviderWindow {
    let date = instant.date().to_string();
    let (stop_hour, stop_minute) = rollover_minute(instant.hour(), instant.minute());
    ProviderWindow {
        era: Era::Bce,
        start: format!("{date} {:02}:{:02}", instant.hour(), instant.minute()),
        stop: format!("{date} {stop_hour:02}:{stop_minute:02}"),
        fallback: None,
    }
}

/// Add one minute with carry into the hour; hours wrap modulo 24.
fn rollover_minute(hour: u32, minute: u32) -> (u32, u32) {
    if minute + 1 >= 60 {
        ((hour + 1) % 24, 0)
    } else {
        (hour, minute + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(date: &str, time: &str) -> ProviderWindow {
        ProviderWindow::one_minute(&Instant::parse(date, time).unwrap()).unwrap()
    }

    #[test]
    fn bce_ides_of_march() {
        let w = window("bc 0044-Mar-15", "12:00");
        assert_eq!(w.era, Era::Bce);
        assert_eq!(w.start, "bc 0044-Mar-15 12:00");
        assert_eq!(w.stop, "bc 0044-Mar-15 12:01");
        assert!(w.fallback.is_none());
    }

    #[test]
    fn bce_minute_carries_into_hour() {
        let w = window("bc 0500-Jun-01", "07:59");
        assert_eq!(w.stop, "bc 0500-Jun-01 08:00");
    }

    #[test]
    fn bce_midnight_wraps_hour_only() {
        let w = window("bc 0500-Jun-01", "23:59");
        assert_eq!(w.stop, "bc 0500-Jun-01 00:00");
    }

    #[test]
    fn ad_window_formats() {
        let w = window("1984-08-18", "08:03:00");
        assert_eq!(w.era, Era::Ad);
        assert_eq!(w.start, "1984-08-18 08:03:00");
        assert_eq!(w.stop, "1984-08-18 08:04:00");
        assert_eq!(
            w.fallback,
            Some(("1984-Aug-18 08:03".to_string(), "1984-Aug-18 08:04".to_string()))
        );
    }

    #[test]
    fn fallback_window_swaps_formats_once() {
        let w = window("1984-08-18", "08:03:00");
        let fb = w.fallback_window().unwrap();
        assert_eq!(fb.start, "1984-Aug-18 08:03");
        assert_eq!(fb.stop, "1984-Aug-18 08:04");
        assert!(fb.fallback_window().is_none());
        assert!(window("bc 0044-Mar-15", "12:00").fallback_window().is_none());
    }

    #[test]
    fn ad_window_crosses_year() {
        let w = window("1999-12-31", "23:59:30");
        assert_eq!(w.stop, "2000-01-01 00:00:30");
    }

    #[test]
    fn rollover_table() {
        assert_eq!(rollover_minute(0, 0), (0, 1));
        assert_eq!(rollover_minute(10, 59), (11, 0));
        assert_eq!(rollover_minute(23, 59), (0, 0));
    }
}
