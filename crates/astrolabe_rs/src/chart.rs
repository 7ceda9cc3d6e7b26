//! House pipeline: civil date, time and location to angles and cusps.
//!
//! ```text
//! Instant ─► JD(UT) ─► JD(TT) ─┬─► IAU 1980 obliquity ─┐
//!                              └─► LST ────────────────┴─► Asc/MC ─► cusps ─► zodiac
//! ```

use astrolabe_chart::{
    ChartAngles, GeoLocation, HouseCusps, HouseSystem, ZodiacPosition, compute_house_cusps,
    ecliptic_to_zodiac,
};
use astrolabe_frames::mean_obliquity_iau1980_deg;
use astrolabe_time::{Instant, delta_t_seconds, julian_day_ut, local_sidereal_time_deg};
use serde::{Deserialize, Serialize};

use crate::config::ChartConfig;
use crate::error::AstrolabeError;
use crate::provider::Geocoder;

/// Input to the house pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    /// `YYYY-MM-DD` or `bc YYYY-Mon-DD`.
    pub date: String,
    /// `HH:MM` or `HH:MM:SS`, UTC.
    pub time: String,
    pub latitude: f64,
    pub longitude: f64,
    /// House-system selector; the configured default when `None`.
    pub house_system: Option<String>,
}

/// Angles, cusps and the intermediates they were derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseChart {
    pub instant: Instant,
    pub location: GeoLocation,
    pub system: HouseSystem,
    pub jd_ut: f64,
    pub jd_tt: f64,
    pub delta_t_seconds: f64,
    pub obliquity_deg: f64,
    pub lst_deg: f64,
    pub angles: ChartAngles,
    pub cusps: HouseCusps,
    /// Zodiac position of each cusp, house 1 first.
    pub cusp_positions: [ZodiacPosition; 12],
    pub ascendant_position: ZodiacPosition,
    pub midheaven_position: ZodiacPosition,
}

/// Compute angles and house cusps for a civil instant and location.
///
/// Uses the modelled ΔT for the instant's year regardless of
/// `config.delta_t`, and evaluates sidereal time at the TT-adjusted day.
pub fn compute_house_chart(
    request: &ChartRequest,
    config: &ChartConfig,
) -> Result<HouseChart, AstrolabeError> {
    let instant = Instant::parse(&request.date, &request.time)?;
    let location = GeoLocation::new(request.latitude, request.longitude)?;
    let selector = request.house_system.as_deref().unwrap_or(&config.house_system);
    let system = HouseSystem::from_selector(selector);
    house_chart_at(instant, location, system)
}

/// As [`compute_house_chart`], resolving `place` through a geocoder.
pub fn compute_house_chart_for_place<G: Geocoder + ?Sized>(
    geocoder: &G,
    place: &str,
    date: &str,
    time: &str,
    house_system: Option<&str>,
    config: &ChartConfig,
) -> Result<HouseChart, AstrolabeError> {
    let location = geocoder.locate(place)?;
    let request = ChartRequest {
        date: date.to_string(),
        time: time.to_string(),
        latitude: location.latitude_deg,
        longitude: location.longitude_deg,
        house_system: house_system.map(str::to_string),
    };
    compute_house_chart(&request, config)
}

fn house_chart_at(
    instant: Instant,
    location: GeoLocation,
    system: HouseSystem,
) -> Result<HouseChart, AstrolabeError> {
    let jd_ut = julian_day_ut(&instant);
    let delta_t = delta_t_seconds(instant.date().astronomical_year());
    let jd_tt = jd_ut.to_tt(delta_t);

    let obliquity = mean_obliquity_iau1980_deg(jd_tt.centuries_since_j2000());
    let lst = local_sidereal_time_deg(jd_tt.value(), location.longitude_deg);

    let angles = ChartAngles::from_sidereal(lst, location.latitude_deg, obliquity);
    let cusps = compute_house_cusps(system, &angles);

    tracing::debug!(
        %instant,
        system = system.name(),
        jd_ut = jd_ut.value(),
        lst,
        asc = angles.ascendant_deg,
        mc = angles.midheaven_deg,
        "computed house chart"
    );

    let ascendant_position = ecliptic_to_zodiac(angles.ascendant_deg)?;
    let midheaven_position = ecliptic_to_zodiac(angles.midheaven_deg)?;
    let mut cusp_positions = [ascendant_position; 12];
    for (slot, &cusp) in cusp_positions.iter_mut().zip(&cusps.cusps) {
        *slot = ecliptic_to_zodiac(cusp)?;
    }

    Ok(HouseChart {
        instant,
        location,
        system,
        jd_ut: jd_ut.value(),
        jd_tt: jd_tt.value(),
        delta_t_seconds: delta_t,
        obliquity_deg: obliquity,
        lst_deg: lst,
        angles,
        cusps,
        cusp_positions,
        ascendant_position,
        midheaven_position,
    })
}
