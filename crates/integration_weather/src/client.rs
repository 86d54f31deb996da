//! OpenWeatherMap weather client
//!
//! HTTP client for the OpenWeatherMap REST API. One lookup issues two GET
//! requests, `/weather` for current conditions and `/forecast` for the
//! 5-day/3-hour list, both parameterized by city and unit system.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{CurrentResponse, ForecastResponse};
use domain::entities::{CurrentConditions, ForecastSample};
use domain::value_objects::UnitSystem;

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// HTTP client could not be initialized
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The provider does not know the requested city
    #[error("City not found: {0}")]
    CityNotFound(String),

    /// The API key was rejected
    #[error("Invalid or missing API key")]
    InvalidApiKey,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Weather service configuration
///
/// The API key is supplied via configuration or environment; it is never
/// hard-coded and never logged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// API base URL (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// OpenWeatherMap API key
    #[serde(default)]
    pub api_key: String,

    /// Country code appended to every city query (fixed per deployment)
    #[serde(default = "default_country_code")]
    pub country_code: String,

    /// Connection timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_country_code() -> String {
    "IN".to_string()
}

const fn default_timeout() -> u64 {
    10
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            country_code: default_country_code(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Weather client trait for fetching provider data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get current conditions for a city
    async fn get_current(
        &self,
        city: &str,
        units: UnitSystem,
    ) -> Result<CurrentConditions, WeatherError>;

    /// Get the 5-day/3-hour forecast for a city
    async fn get_forecast(
        &self,
        city: &str,
        units: UnitSystem,
    ) -> Result<Vec<ForecastSample>, WeatherError>;
}

/// OpenWeatherMap HTTP client implementation
#[derive(Debug)]
pub struct OpenWeatherClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenWeatherClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// The `q` query value: `{city},{countryCode}`
    fn city_query(&self, city: &str) -> String {
        format!("{city},{}", self.config.country_code)
    }

    /// Issue one GET against an endpoint and return the checked response
    async fn fetch(
        &self,
        endpoint: &str,
        city: &str,
        units: UnitSystem,
    ) -> Result<reqwest::Response, WeatherError> {
        let url = format!("{}/{endpoint}", self.config.base_url);
        debug!(endpoint, city, units = %units, "fetching from weather provider");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", self.city_query(city).as_str()),
                ("appid", self.config.api_key.as_str()),
                ("units", units.api_value()),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(WeatherError::CityNotFound(city.to_string()));
        }
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(WeatherError::InvalidApiKey);
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }

        Ok(response)
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherClient {
    #[instrument(skip(self), fields(city = %city, units = %units))]
    async fn get_current(
        &self,
        city: &str,
        units: UnitSystem,
    ) -> Result<CurrentConditions, WeatherError> {
        let raw: CurrentResponse = self
            .fetch("weather", city, units)
            .await?
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        raw.into_domain(units)
    }

    #[instrument(skip(self), fields(city = %city, units = %units))]
    async fn get_forecast(
        &self,
        city: &str,
        units: UnitSystem,
    ) -> Result<Vec<ForecastSample>, WeatherError> {
        let raw: ForecastResponse = self
            .fetch("forecast", city, units)
            .await?
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        raw.into_domain(units)
    }
}
