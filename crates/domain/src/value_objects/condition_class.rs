//! Condition classifier
//!
//! Maps a provider condition category (e.g. "Clear", "Clouds", "light rain")
//! to one of four broad classes used to theme the rendered output.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Broad weather class used for presentation theming
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionClass {
    /// Category mentions clouds
    Cloudy,
    /// Category mentions sun or clear sky
    Sunny,
    /// Category mentions rain
    Rainy,
    /// Anything else (mist, snow, haze, ...)
    #[default]
    Default,
}

impl ConditionClass {
    /// Classify a condition category by case-insensitive substring match
    ///
    /// Pure and total; unknown categories fall through to `Default`.
    #[must_use]
    pub fn classify(category: &str) -> Self {
        let lower = category.to_lowercase();
        if lower.contains("cloud") {
            Self::Cloudy
        } else if lower.contains("sun") || lower.contains("clear") {
            Self::Sunny
        } else if lower.contains("rain") {
            Self::Rainy
        } else {
            Self::Default
        }
    }

    /// ANSI color code the presentation layer uses for the banner
    #[must_use]
    pub const fn ansi_color(self) -> &'static str {
        match self {
            Self::Cloudy => "\x1b[90m",
            Self::Sunny => "\x1b[33m",
            Self::Rainy => "\x1b[34m",
            Self::Default => "\x1b[0m",
        }
    }
}

impl fmt::Display for ConditionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Cloudy => "cloudy",
            Self::Sunny => "sunny",
            Self::Rainy => "rainy",
            Self::Default => "default",
        };
        f.write_str(name)
    }
}
