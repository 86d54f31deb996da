//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// One generic message for every provider/network failure; the UI makes no
/// distinction between an unreachable provider, an unknown city, and
/// rate-limiting.
pub const FETCH_FAILED_MESSAGE: &str =
    "Could not fetch weather data. Please check the city name.";

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level contract violation (programmer error, fails loudly)
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// External weather service failed
    #[error("External service error: {0}")]
    ExternalService(String),

    /// The provider does not know the requested city
    #[error("City not found: {0}")]
    CityNotFound(String),

    /// Rate limit exceeded at the provider
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Whether this error should be shown to the user as the generic fetch
    /// failure rather than propagated as a programmer error
    #[must_use]
    pub const fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            Self::ExternalService(_) | Self::CityNotFound(_) | Self::RateLimited
        )
    }

    /// The user-facing message for this error
    ///
    /// Every fetch failure collapses to one generic message; anything else is
    /// a contract violation and keeps its specific text for development.
    #[must_use]
    pub fn user_message(&self) -> String {
        if self.is_fetch_failure() {
            FETCH_FAILED_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }
}
