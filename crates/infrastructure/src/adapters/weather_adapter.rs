//! Weather adapter - Implements WeatherPort using integration_weather

use application::ApplicationError;
use application::ports::WeatherPort;
use async_trait::async_trait;
use domain::entities::{CurrentConditions, ForecastSample};
use domain::value_objects::UnitSystem;
use integration_weather::{OpenWeatherClient, WeatherClient, WeatherConfig, WeatherError};
use tracing::instrument;

/// Adapter for the weather port backed by the OpenWeatherMap client
pub struct WeatherAdapter {
    client: OpenWeatherClient,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"OpenWeatherClient")
            .finish()
    }
}

impl WeatherAdapter {
    /// Create an adapter from provider configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client = OpenWeatherClient::new(config)
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration weather errors to application errors
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::CityNotFound(city) => ApplicationError::CityNotFound(city),
            WeatherError::RateLimitExceeded => ApplicationError::RateLimited,
            WeatherError::InvalidApiKey => {
                ApplicationError::Configuration("weather provider rejected the API key".to_string())
            },
            WeatherError::ConnectionFailed(msg)
            | WeatherError::RequestFailed(msg)
            | WeatherError::ParseError(msg)
            | WeatherError::ServiceUnavailable(msg) => ApplicationError::ExternalService(msg),
        }
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self))]
    async fn current_conditions(
        &self,
        city: &str,
        units: UnitSystem,
    ) -> Result<CurrentConditions, ApplicationError> {
        self.client
            .get_current(city, units)
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    async fn forecast(
        &self,
        city: &str,
        units: UnitSystem,
    ) -> Result<Vec<ForecastSample>, ApplicationError> {
        self.client
            .get_forecast(city, units)
            .await
            .map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adapter_creation_succeeds_with_defaults() {
        assert!(WeatherAdapter::new(WeatherConfig::default()).is_ok());
    }

    #[test]
    fn city_not_found_maps_to_application_variant() {
        let mapped = WeatherAdapter::map_error(WeatherError::CityNotFound("Atlantis".to_string()));
        assert!(matches!(mapped, ApplicationError::CityNotFound(ref c) if c == "Atlantis"));
        assert!(mapped.is_fetch_failure());
    }

    #[test]
    fn rate_limit_maps_to_rate_limited() {
        let mapped = WeatherAdapter::map_error(WeatherError::RateLimitExceeded);
        assert!(matches!(mapped, ApplicationError::RateLimited));
    }

    #[test]
    fn rejected_key_maps_to_configuration_error() {
        let mapped = WeatherAdapter::map_error(WeatherError::InvalidApiKey);
        assert!(matches!(mapped, ApplicationError::Configuration(_)));
        assert!(!mapped.is_fetch_failure());
    }

    #[test]
    fn transport_failures_map_to_external_service() {
        let mapped =
            WeatherAdapter::map_error(WeatherError::ServiceUnavailable("HTTP 503".to_string()));
        assert!(matches!(mapped, ApplicationError::ExternalService(_)));
        assert!(mapped.is_fetch_failure());
    }
}
