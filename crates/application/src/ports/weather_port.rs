//! Weather service port
//!
//! Defines the interface for weather data retrieval. One lookup issues two
//! calls through this port: current conditions and the 3-hourly forecast.

use async_trait::async_trait;
use domain::entities::{CurrentConditions, ForecastSample};
use domain::value_objects::UnitSystem;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather provider operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Get current conditions for a city
    async fn current_conditions(
        &self,
        city: &str,
        units: UnitSystem,
    ) -> Result<CurrentConditions, ApplicationError>;

    /// Get the 5-day/3-hour forecast list for a city
    ///
    /// Samples arrive in chronological order, typically ~40 entries.
    async fn forecast(
        &self,
        city: &str,
        units: UnitSystem,
    ) -> Result<Vec<ForecastSample>, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn WeatherPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn WeatherPort>();
    }
}
