//! Types for house system computation.
//!
//! Provides the house-system selector and the twelve-cusp result type used
//! by the house computation module.

use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// The supported house division systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HouseSystem {
    /// Placidus (approximation): trisect the Asc-MC quadrant arcs.
    #[default]
    Placidus,
    /// Equal houses: each house spans exactly 30 degrees from the Ascendant.
    Equal,
    /// Whole-sign houses: house 1 is the whole sign containing the Ascendant.
    WholeSign,
    /// Koch (approximation): MC-to-Asc arc split into equal thirds.
    Koch,
}

/// All house systems in enum order.
pub const ALL_HOUSE_SYSTEMS: [HouseSystem; 4] = [
    HouseSystem::Placidus,
    HouseSystem::Equal,
    HouseSystem::WholeSign,
    HouseSystem::Koch,
];

impl HouseSystem {
    /// All defined house systems.
    pub const fn all() -> &'static [HouseSystem] {
        &ALL_HOUSE_SYSTEMS
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Placidus => "Placidus",
            Self::Equal => "Equal",
            Self::WholeSign => "Whole Sign",
            Self::Koch => "Koch",
        }
    }

    /// Whether cusps 1 and 10 are pinned to the Ascendant and MC.
    pub const fn is_quadrant(self) -> bool {
        matches!(self, Self::Placidus | Self::Koch)
    }

    /// Resolve a user-supplied selector, case-insensitively.
    ///
    /// Unrecognised selectors fall back to Placidus with a warning; this
    /// never fails.
    pub fn from_selector(selector: &str) -> Self {
        let s = selector.trim().to_ascii_lowercase();
        match s.as_str() {
            "placidus" => Self::Placidus,
            "equal" => Self::Equal,
            "whole-sign" | "whole sign" => Self::WholeSign,
            "koch" => Self::Koch,
            _ => {
                tracing::warn!(selector, "unknown house system, falling back to Placidus");
                Self::Placidus
            }
        }
    }
}

impl FromStr for HouseSystem {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_selector(s))
    }
}

impl Display for HouseSystem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Twelve house cusps for one system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseCusps {
    /// System the cusps were computed with.
    pub system: HouseSystem,
    /// Cusp longitudes in degrees, [0, 360). Index 0 is house 1.
    pub cusps: [f64; 12],
}

impl HouseCusps {
    /// Longitude of the cusp of house `n` (1-12).
    pub fn cusp(&self, n: u8) -> Result<f64, ChartError> {
        match n {
            1..=12 => Ok(self.cusps[(n - 1) as usize]),
            _ => Err(ChartError::invalid("house", format!("{n} is not in 1..=12"))),
        }
    }
}
