//! Error type for the convenience wrapper.

use astrolabe_chart::ChartError;
use astrolabe_time::TimeError;
use thiserror::Error;

use crate::provider::ProviderError;

/// Errors returned by the astrolabe_rs pipelines.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AstrolabeError {
    /// A request field failed validation.
    #[error("invalid {field}: {reason}")]
    InvalidInput {
        field: &'static str,
        reason: String,
    },
    /// Date/time parsing or validation failed.
    #[error(transparent)]
    Time(#[from] TimeError),
    /// Location or house validation failed.
    #[error(transparent)]
    Chart(#[from] ChartError),
    /// The ephemeris provider or geocoder failed.
    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),
    /// The configuration could not be parsed.
    #[error("config error: {0}")]
    Config(String),
    /// The configuration file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl AstrolabeError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the input field that failed validation, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidInput { field, .. } => Some(field),
            Self::Time(e) => Some(e.field()),
            Self::Chart(e) => Some(e.field()),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for AstrolabeError {
    fn from(e: toml::de::Error) -> Self {
        Self::Config(e.to_string())
    }
}
