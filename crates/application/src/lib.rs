//! Application layer - Use cases and orchestration
//!
//! Defines the weather port and the lookup service that drives one
//! city-lookup submission from loading state to rendered report.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
