//! Forecast and current-conditions entities
//!
//! Types for the data consumed from the weather provider. Samples are
//! immutable once parsed; all display-ready fields (temperature, humidity)
//! are value objects carrying their own validity.

use crate::errors::DomainError;
use crate::value_objects::{Humidity, Temperature};
use serde::{Deserialize, Serialize};

/// Base URL for provider icon assets
const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

/// Time-of-day marker for the representative midday sample
const MIDDAY: &str = "12:00:00";

/// One timestamped forecast point from the provider's 3-hourly list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    /// Provider timestamp in "YYYY-MM-DD HH:MM:SS" form
    pub timestamp: String,
    /// Temperature in the unit system active at fetch time
    pub temperature: Temperature,
    /// Condition category, e.g. "Clear", "Clouds", "Rain"
    pub condition: String,
    /// Human-readable condition description
    pub description: String,
    /// Provider icon code, e.g. "10d"
    pub icon: String,
}

impl ForecastSample {
    /// The calendar-date portion of the timestamp (before the first space)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimestamp` if the timestamp has no
    /// date/time separator. Malformed timestamps fail fast here rather than
    /// silently mis-grouping.
    pub fn date_key(&self) -> Result<&str, DomainError> {
        self.timestamp
            .split_once(' ')
            .map(|(date, _)| date)
            .ok_or_else(|| DomainError::InvalidTimestamp(self.timestamp.clone()))
    }

    /// Whether this sample marks local noon (time portion literally "12:00:00")
    #[must_use]
    pub fn is_midday(&self) -> bool {
        self.timestamp
            .split_once(' ')
            .is_some_and(|(_, time)| time == MIDDAY)
    }

    /// URL of the provider's 2x icon asset for this sample
    #[must_use]
    pub fn icon_url(&self) -> String {
        format!("{ICON_BASE_URL}/{}@2x.png", self.icon)
    }
}

/// One sample chosen to represent a calendar day
///
/// Derived from the flat sample list by [`crate::group_by_day`]; never
/// independently persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    /// Calendar date key in "YYYY-MM-DD" form
    pub date: String,
    /// The representative sample for that date
    pub sample: ForecastSample,
}

/// Current weather conditions for a location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Location name as resolved by the provider
    pub location_name: String,
    /// Temperature in the unit system active at fetch time
    pub temperature: Temperature,
    /// Relative humidity
    pub humidity: Humidity,
    /// Wind speed, in the unit system's wind unit
    pub wind_speed: f64,
    /// Condition category, e.g. "Clear"
    pub condition: String,
    /// Human-readable condition description
    pub description: String,
    /// Provider icon code
    pub icon: String,
}

impl CurrentConditions {
    /// URL of the provider's 2x icon asset for the current conditions
    #[must_use]
    pub fn icon_url(&self) -> String {
        format!("{ICON_BASE_URL}/{}@2x.png", self.icon)
    }
}
