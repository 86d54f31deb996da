//! Application configuration
//!
//! Layered the usual way: built-in defaults, then an optional `skycast.toml`
//! in the working directory, then `SKYCAST_*` environment overrides. The
//! provider
//! API key comes from configuration or the `SKYCAST_API_KEY` environment
//! variable and is never hard-coded.

use application::ApplicationError;
use domain::value_objects::UnitSystem;
use integration_weather::WeatherConfig;
use serde::{Deserialize, Serialize};

/// Environment variable carrying the provider API key
pub const API_KEY_ENV: &str = "SKYCAST_API_KEY";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Unit system used for requests and display
    #[serde(default)]
    pub units: UnitSystem,

    /// Weather provider settings
    #[serde(default)]
    pub provider: WeatherConfig,
}

impl AppConfig {
    /// Load configuration from defaults, optional file, and environment
    ///
    /// # Errors
    ///
    /// Returns a `config::ConfigError` if the file or environment sources
    /// cannot be parsed into the expected shape.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Load from file if it exists
            .add_source(config::File::with_name("skycast").required(false))
            // Override with environment variables (e.g., SKYCAST_UNITS)
            .add_source(
                config::Environment::with_prefix("SKYCAST")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        Ok(config.with_api_key_override(std::env::var(API_KEY_ENV).ok()))
    }

    /// Apply the dedicated API-key environment override, if present
    #[must_use]
    pub fn with_api_key_override(mut self, api_key: Option<String>) -> Self {
        if let Some(key) = api_key {
            self.provider.api_key = key;
        }
        self
    }

    /// Check that the configuration is usable at startup
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if the API key is missing,
    /// so a bad deployment fails before the first lookup instead of as a
    /// confusing provider error.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        if self.provider.api_key.trim().is_empty() {
            return Err(ApplicationError::Configuration(format!(
                "weather provider API key is not set (set {API_KEY_ENV} or provider.api_key)"
            )));
        }
        Ok(())
    }
}
