//! Interfaces to the external ephemeris provider and geocoder.
//!
//! Neither collaborator is implemented here: transports live with the
//! caller. The pipelines only see these traits.

use astrolabe_chart::GeoLocation;
use astrolabe_frames::EquatorialCoord;
use astrolabe_time::{Instant, ProviderWindow};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::body::Body;

/// One observation row returned by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderRow {
    pub body: Body,
    /// UTC instant of the row.
    pub instant: Instant,
    /// The row timestamp exactly as the provider wrote it.
    pub raw_date: String,
    /// Apparent geocentric RA/Dec of date.
    pub equatorial: EquatorialCoord,
}

/// Failures reported by the external collaborators.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ProviderError {
    /// The provider could not be reached or answered with an error.
    #[error("provider unavailable: {0}")]
    Unavailable(String),
    /// The provider could not interpret the START/STOP literal.
    #[error("provider rejected date literal '{start}'")]
    DateRejected { start: String },
    /// The response has no `$$SOE`/`$$EOE` data block.
    #[error("no data section in provider response")]
    NoDataSection,
    /// The data block held no rows for the body.
    #[error("no rows returned for {0}")]
    NoRows(Body),
    /// A data row could not be parsed.
    #[error("malformed row '{line}': {reason}")]
    MalformedRow { line: String, reason: String },
    /// The geocoder found no match.
    #[error("place not found: {0}")]
    PlaceNotFound(String),
}

/// Source of apparent equatorial coordinates.
pub trait EphemerisProvider {
    /// Apparent RA/Dec rows for `body` over `window`.
    ///
    /// Implementations return [`ProviderError::DateRejected`] when the
    /// provider cannot read the window literals; the caller then retries
    /// with [`ProviderWindow::fallback_window`] where one exists.
    fn apparent_positions(
        &self,
        body: Body,
        window: &ProviderWindow,
    ) -> Result<Vec<ProviderRow>, ProviderError>;
}

/// Place-name lookup.
pub trait Geocoder {
    fn locate(&self, place: &str) -> Result<GeoLocation, ProviderError>;
}
