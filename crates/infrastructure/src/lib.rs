//! Infrastructure layer - Adapters for external systems
//!
//! Implements the ports defined in the application layer and owns
//! configuration loading and telemetry setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::WeatherAdapter;
pub use config::AppConfig;
pub use telemetry::init_telemetry;
