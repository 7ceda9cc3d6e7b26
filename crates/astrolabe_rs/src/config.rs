//! Pipeline configuration, loadable from TOML.
//!
//! ```toml
//! house_system = "koch"
//! delta_t = "model"        # or a number of seconds, e.g. 69
//! bodies = ["Sun", "Moon", "Mars"]
//! provider_step = "1 m"
//! ```

use std::path::Path;

use astrolabe_time::{DeltaTPolicy, PROVIDER_ROW_DELTA_T_S};
use serde::{Deserialize, Deserializer, Serialize};

use crate::body::{Body, CHART_BODIES};
use crate::error::AstrolabeError;
use crate::horizons::DEFAULT_STEP;

/// Settings shared by the house and body pipelines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    /// House-system selector used when a request names none.
    pub house_system: String,
    /// ΔT applied to provider observations. The house pipeline always uses
    /// the modelled ΔT.
    #[serde(deserialize_with = "deserialize_delta_t")]
    pub delta_t: DeltaTPolicy,
    /// Bodies requested from the provider.
    pub bodies: Vec<Body>,
    /// Provider STEP_SIZE literal.
    pub provider_step: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            house_system: "placidus".to_string(),
            delta_t: DeltaTPolicy::Fixed(PROVIDER_ROW_DELTA_T_S),
            bodies: CHART_BODIES.to_vec(),
            provider_step: DEFAULT_STEP.to_string(),
        }
    }
}

impl ChartConfig {
    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, AstrolabeError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, AstrolabeError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    fn validate(&self) -> Result<(), AstrolabeError> {
        if let DeltaTPolicy::Fixed(s) = self.delta_t {
            if !s.is_finite() {
                return Err(AstrolabeError::Config(format!("delta_t {s} is not finite")));
            }
        }
        if self.provider_step.trim().is_empty() {
            return Err(AstrolabeError::Config("provider_step must not be empty".into()));
        }
        Ok(())
    }
}

/// Accept `delta_t = "model"`, `delta_t = 69` or the tagged
/// `delta_t = { fixed = 69.0 }`.
fn deserialize_delta_t<'de, D>(deserializer: D) -> Result<DeltaTPolicy, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Seconds(f64),
        Policy(DeltaTPolicy),
    }

    Ok(match Repr::deserialize(deserializer)? {
        Repr::Seconds(s) => DeltaTPolicy::Fixed(s),
        Repr::Policy(p) => p,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = ChartConfig::default();
        assert_eq!(c.house_system, "placidus");
        assert_eq!(c.delta_t, DeltaTPolicy::Fixed(69.0));
        assert_eq!(c.bodies.len(), 10);
        assert_eq!(c.provider_step, "1 m");
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(ChartConfig::from_toml_str("").unwrap(), ChartConfig::default());
    }

    #[test]
    fn full_document() {
        let c = ChartConfig::from_toml_str(
            r#"
            house_system = "koch"
            delta_t = "model"
            bodies = ["sun", "Moon", "MARS"]
            provider_step = "2 m"
            "#,
        )
        .unwrap();
        assert_eq!(c.house_system, "koch");
        assert_eq!(c.delta_t, DeltaTPolicy::Model);
        assert_eq!(c.bodies, vec![Body::Sun, Body::Moon, Body::Mars]);
        assert_eq!(c.provider_step, "2 m");
    }

    #[test]
    fn delta_t_forms() {
        let c = ChartConfig::from_toml_str("delta_t = 64").unwrap();
        assert_eq!(c.delta_t, DeltaTPolicy::Fixed(64.0));
        let c = ChartConfig::from_toml_str("delta_t = 69.5").unwrap();
        assert_eq!(c.delta_t, DeltaTPolicy::Fixed(69.5));
        let c = ChartConfig::from_toml_str("delta_t = { fixed = 70.0 }").unwrap();
        assert_eq!(c.delta_t, DeltaTPolicy::Fixed(70.0));
    }

    #[test]
    fn rejects_bad_documents() {
        assert!(matches!(
            ChartConfig::from_toml_str("bodies = [\"Vulcan\"]"),
            Err(AstrolabeError::Config(_))
        ));
        assert!(matches!(
            ChartConfig::from_toml_str("colour = \"red\""),
            Err(AstrolabeError::Config(_))
        ));
        assert!(matches!(
            ChartConfig::from_toml_str("provider_step = \"  \""),
            Err(AstrolabeError::Config(_))
        ));
        assert!(matches!(
            ChartConfig::from_toml_str("delta_t = nan"),
            Err(AstrolabeError::Config(_))
        ));
    }

    #[test]
    fn load_missing_file_is_io() {
        assert!(matches!(
            ChartConfig::load("/nonexistent/astrolabe.toml"),
            Err(AstrolabeError::Io(_))
        ));
    }
}
