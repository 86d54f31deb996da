//! Unit system value object
//!
//! Metric or imperial mode. Affects both the unit requested from the provider
//! and the suffixes used when rendering temperatures and wind speeds.

use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Measurement unit system for requests and display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Celsius, m/s
    #[default]
    Metric,
    /// Fahrenheit, mph
    Imperial,
}

impl UnitSystem {
    /// Value of the provider's `units` query parameter
    #[must_use]
    pub const fn api_value(self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }

    /// Suffix appended to displayed temperatures
    #[must_use]
    pub const fn temperature_suffix(self) -> &'static str {
        match self {
            Self::Metric => "°C",
            Self::Imperial => "°F",
        }
    }

    /// Suffix appended to displayed wind speeds
    #[must_use]
    pub const fn wind_speed_suffix(self) -> &'static str {
        match self {
            Self::Metric => "m/s",
            Self::Imperial => "mph",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.api_value())
    }
}

impl std::str::FromStr for UnitSystem {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "celsius" | "c" => Ok(Self::Metric),
            "imperial" | "fahrenheit" | "f" => Ok(Self::Imperial),
            _ => Err(DomainError::InvalidUnit(s.to_string())),
        }
    }
}
