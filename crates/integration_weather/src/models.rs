//! Weather data models
//!
//! Raw response shapes consumed from the OpenWeatherMap API and their
//! conversion into domain types. Only the field subset the application reads
//! is modeled; everything else in the payload is ignored.

use serde::Deserialize;

use crate::client::WeatherError;
use domain::entities::{CurrentConditions, ForecastSample};
use domain::value_objects::{Humidity, Temperature, UnitSystem};

/// `weather[0]` object: condition category, description, icon code
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherInfo {
    /// Condition category, e.g. "Clear", "Clouds", "Rain"
    pub main: String,
    /// Human-readable description, e.g. "light rain"
    pub description: String,
    /// Icon code, e.g. "10d"
    pub icon: String,
}

/// `main` object: temperature and humidity readings
#[derive(Debug, Clone, Deserialize)]
pub struct MainData {
    /// Temperature in the requested unit system
    pub temp: f64,
    /// Relative humidity percentage
    #[serde(default)]
    pub humidity: Option<u8>,
}

/// `wind` object
#[derive(Debug, Clone, Deserialize)]
pub struct WindData {
    /// Wind speed in the requested unit system (m/s or mph)
    pub speed: f64,
}

/// Response of `GET /weather` (current conditions)
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentResponse {
    /// Location name as resolved by the provider
    pub name: String,
    pub main: MainData,
    pub wind: WindData,
    pub weather: Vec<WeatherInfo>,
}

impl CurrentResponse {
    /// Convert into domain current conditions, tagging the temperature with
    /// the unit system the request asked for
    ///
    /// # Errors
    ///
    /// Returns `WeatherError::ParseError` if the `weather` array is empty.
    pub fn into_domain(self, units: UnitSystem) -> Result<CurrentConditions, WeatherError> {
        let info = self
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::ParseError("empty weather array".to_string()))?;

        Ok(CurrentConditions {
            location_name: self.name,
            temperature: Temperature::new(self.main.temp, units),
            humidity: Humidity::clamped(self.main.humidity.unwrap_or_default()),
            wind_speed: self.wind.speed,
            condition: info.main,
            description: info.description,
            icon: info.icon,
        })
    }
}

/// One entry of the forecast `list[]`
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastEntry {
    /// Timestamp in "YYYY-MM-DD HH:MM:SS" form
    pub dt_txt: String,
    pub main: MainData,
    pub weather: Vec<WeatherInfo>,
}

impl ForecastEntry {
    /// Convert into a domain forecast sample
    ///
    /// # Errors
    ///
    /// Returns `WeatherError::ParseError` if the `weather` array is empty.
    pub fn into_domain(self, units: UnitSystem) -> Result<ForecastSample, WeatherError> {
        let info = self
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::ParseError("empty weather array".to_string()))?;

        Ok(ForecastSample {
            timestamp: self.dt_txt,
            temperature: Temperature::new(self.main.temp, units),
            condition: info.main,
            description: info.description,
            icon: info.icon,
        })
    }
}

/// Response of `GET /forecast` (5-day/3-hour forecast)
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    /// Chronological forecast samples, typically ~40 entries
    pub list: Vec<ForecastEntry>,
}

impl ForecastResponse {
    /// Convert the full list into domain samples, preserving order
    ///
    /// # Errors
    ///
    /// Returns `WeatherError::ParseError` if any entry lacks a weather array.
    pub fn into_domain(self, units: UnitSystem) -> Result<Vec<ForecastSample>, WeatherError> {
        self.list
            .into_iter()
            .map(|entry| entry.into_domain(units))
            .collect()
    }
}
