//! Equatorial pipeline: apparent RA/Dec to ecliptic longitude and zodiac.

use astrolabe_chart::{ZodiacPosition, ecliptic_to_zodiac};
use astrolabe_frames::{EclipticCoord, EquatorialCoord, equatorial_to_ecliptic_of_date};
use astrolabe_time::{Instant, ProviderWindow, julian_day_ut};
use serde::{Deserialize, Serialize};

use crate::body::Body;
use crate::config::ChartConfig;
use crate::error::AstrolabeError;
use crate::provider::{EphemerisProvider, ProviderError, ProviderRow};

/// Apparent equatorial coordinates of a body at an instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyObservation {
    /// Opaque body label, passed through to the result.
    pub body: String,
    pub equatorial: EquatorialCoord,
    pub instant: Instant,
}

/// Ecliptic and zodiac position of one body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    pub body: String,
    pub jd_tt: f64,
    pub ecliptic: EclipticCoord,
    pub zodiac: ZodiacPosition,
}

/// Convert observations to ecliptic-of-date positions.
///
/// ΔT comes from `config.delta_t`. The call is atomic: the first invalid
/// observation fails the whole batch.
pub fn compute_body_positions(
    observations: &[BodyObservation],
    config: &ChartConfig,
) -> Result<Vec<BodyPosition>, AstrolabeError> {
    let positions = observations
        .iter()
        .map(|obs| body_position(obs, config))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(count = positions.len(), "computed body positions");
    Ok(positions)
}

fn body_position(obs: &BodyObservation, config: &ChartConfig) -> Result<BodyPosition, AstrolabeError> {
    let EquatorialCoord { ra_deg, dec_deg } = obs.equatorial;
    if !ra_deg.is_finite() {
        return Err(AstrolabeError::invalid("ra", format!("{ra_deg} is not finite for {}", obs.body)));
    }
    if !dec_deg.is_finite() || !(-90.0..=90.0).contains(&dec_deg) {
        return Err(AstrolabeError::invalid(
            "dec",
            format!("{dec_deg} is not in [-90, 90] for {}", obs.body),
        ));
    }

    let delta_t = config
        .delta_t
        .seconds_for_year(obs.instant.date().astronomical_year());
    let jd_tt = julian_day_ut(&obs.instant).to_tt(delta_t);
    let ecliptic = equatorial_to_ecliptic_of_date(obs.equatorial, jd_tt.value(), None);

    Ok(BodyPosition {
        body: obs.body.clone(),
        jd_tt: jd_tt.value(),
        ecliptic,
        zodiac: ecliptic_to_zodiac(ecliptic.lon_deg)?,
    })
}

/// Fetch each body from the provider for the one-minute window at
/// `date`/`time` and run the first row through [`compute_body_positions`].
///
/// `bodies` overrides the configured list; `None` asks for `config.bodies`.
pub fn positions_from_provider<P: EphemerisProvider + ?Sized>(
    provider: &P,
    bodies: Option<&[Body]>,
    date: &str,
    time: &str,
    config: &ChartConfig,
) -> Result<Vec<BodyPosition>, AstrolabeError> {
    let instant = Instant::parse(date, time)?;
    let window = ProviderWindow::one_minute(&instant)?;
    let bodies = bodies.unwrap_or(&config.bodies);

    let mut observations = Vec::with_capacity(bodies.len());
    for &body in bodies {
        let row = fetch_rows(provider, body, &window)?
            .into_iter()
            .next()
            .ok_or(ProviderError::NoRows(body))?;
        observations.push(BodyObservation {
            body: body.name().to_string(),
            equatorial: row.equatorial,
            instant: row.instant,
        });
    }
    compute_body_positions(&observations, config)
}

/// Query once, retrying in the fallback format when the provider rejects
/// the primary literal.
fn fetch_rows<P: EphemerisProvider + ?Sized>(
    provider: &P,
    body: Body,
    window: &ProviderWindow,
) -> Result<Vec<ProviderRow>, ProviderError> {
    match provider.apparent_positions(body, window) {
        Err(ProviderError::DateRejected { start }) => match window.fallback_window() {
            Some(fallback) => {
                tracing::warn!(%body, rejected = %start, retry = %fallback.start, "provider rejected date, retrying");
                provider.apparent_positions(body, &fallback)
            }
            None => Err(ProviderError::DateRejected { start }),
        },
        other => other,
    }
}
