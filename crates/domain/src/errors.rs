//! Domain-level errors
//!
//! These are contract violations by an upstream caller or configuration, not
//! runtime conditions a user should ever see.

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Unit system string that is neither metric nor imperial
    #[error("Invalid unit system: {0}. Use 'metric' or 'imperial'")]
    InvalidUnit(String),

    /// Forecast timestamp without a date/time separator
    #[error("Invalid forecast timestamp: {0:?} (expected 'YYYY-MM-DD HH:MM:SS')")]
    InvalidTimestamp(String),

    /// Humidity percentage outside 0-100
    #[error("Invalid humidity: {0}% is out of range (must be 0-100)")]
    InvalidHumidity(u8),
}
