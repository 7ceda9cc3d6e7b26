//! Text codec for a JPL HORIZONS-style observer-table provider.
//!
//! Builds the query parameter list for a one-minute observer ephemeris and
//! parses the CSV block between `$$SOE` and `$$EOE` in the response. No
//! transport is included.
//!
//! With `QUANTITIES='1,2'` and `CSV_FORMAT='YES'` each data row reads
//!
//! ```text
//! date, sun flag, moon flag, RA (astrometric), DEC (astrometric), RA (apparent), DEC (apparent),
//! ```
//!
//! so the apparent pair lives in columns 5 and 6.

use astrolabe_frames::EquatorialCoord;
use astrolabe_time::{CivilDate, Instant, ProviderWindow, parse_time_of_day};
use chrono::NaiveDateTime;

use crate::body::Body;
use crate::provider::{ProviderError, ProviderRow};

/// Geocentric observer: body 399 (Earth), site 500 (geocenter).
pub const GEOCENTER: &str = "500@399";

/// Step size for the one-minute window.
pub const DEFAULT_STEP: &str = "1 m";

const START_MARKER: &str = "$$SOE";
const END_MARKER: &str = "$$EOE";
const DATE_REJECTION: &str = "Cannot interpret date";

const RA_APPARENT_COL: usize = 5;
const DEC_APPARENT_COL: usize = 6;

/// AD row timestamp formats, most precise first.
const ROW_FORMATS: [&str; 2] = ["%Y-%b-%d %H:%M:%S%.f", "%Y-%b-%d %H:%M"];

/// Query parameters for an apparent RA/Dec observer table.
///
/// Values are single-quoted the way the provider expects them in a URL.
pub fn horizons_query(body: Body, window: &ProviderWindow, step: &str) -> Vec<(&'static str, String)> {
    let q = |v: &str| format!("'{v}'");
    vec![
        ("format", "json".to_string()),
        ("COMMAND", q(&body.code().to_string())),
        ("OBJ_DATA", q("NO")),
        ("MAKE_EPHEM", q("YES")),
        ("EPHEM_TYPE", q("OBSERVER")),
        ("CENTER", q(GEOCENTER)),
        ("START_TIME", q(&window.start)),
        ("STOP_TIME", q(&window.stop)),
        ("STEP_SIZE", q(step)),
        ("QUANTITIES", q("1,2")),
        ("ANG_FORMAT", q("DEG")),
        ("CSV_FORMAT", q("YES")),
    ]
}

/// Whether a provider response says it could not read the time literals.
pub fn is_date_rejection(response: &str) -> bool {
    response.contains(DATE_REJECTION)
}

/// Parse the `$$SOE ... $$EOE` block of an observer table.
///
/// Fails on the first malformed row; a response without the block is
/// [`ProviderError::NoDataSection`].
pub fn parse_observer_table(body: Body, response: &str) -> Result<Vec<ProviderRow>, ProviderError> {
    let block = data_block(response).ok_or(ProviderError::NoDataSection)?;
    block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| parse_row(body, line))
        .collect()
}

fn data_block(response: &str) -> Option<&str> {
    let start = response.find(START_MARKER)? + START_MARKER.len();
    let len = response[start..].find(END_MARKER)?;
    Some(&response[start..start + len])
}

fn parse_row(body: Body, line: &str) -> Result<ProviderRow, ProviderError> {
    let malformed = |reason: String| ProviderError::MalformedRow {
        line: line.to_string(),
        reason,
    };
    let cols: Vec<&str> = line.split(',').map(str::trim).collect();
    if cols.len() <= DEC_APPARENT_COL {
        return Err(malformed(format!(
            "expected at least {} columns, found {}",
            DEC_APPARENT_COL + 1,
            cols.len()
        )));
    }
    let angle = |col: usize, name: &str| {
        cols[col]
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| malformed(format!("{name} '{}' is not a number", cols[col])))
    };
    let ra_deg = angle(RA_APPARENT_COL, "RA")?;
    let dec_deg = angle(DEC_APPARENT_COL, "DEC")?;
    let instant = parse_row_timestamp(cols[0]).map_err(malformed)?;

    Ok(ProviderRow {
        body,
        instant,
        raw_date: cols[0].to_string(),
        equatorial: EquatorialCoord::new(ra_deg, dec_deg),
    })
}

/// Row timestamps are `YYYY-Mon-DD HH:MM[:SS[.fff]]`, or the same with a
/// leading `b` for BCE years.
fn parse_row_timestamp(raw: &str) -> Result<Instant, String> {
    if let Some(rest) = raw.strip_prefix('b') {
        let (date, time) = rest
            .split_once(' ')
            .ok_or_else(|| format!("timestamp '{raw}' has no time part"))?;
        let date = CivilDate::parse(&format!("bc {date}")).map_err(|e| e.to_string())?;
        let (hour, minute, second) = parse_time_of_day(time).map_err(|e| e.to_string())?;
        return Instant::new(date, hour, minute, second).map_err(|e| e.to_string());
    }
    let dt = ROW_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .ok_or_else(|| format!("timestamp '{raw}' is not YYYY-Mon-DD HH:MM[:SS]"))?;
    Instant::from_naive(dt).map_err(|e| e.to_string())
}
