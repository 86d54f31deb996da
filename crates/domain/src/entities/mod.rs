//! Domain entities

mod forecast;

pub use forecast::{CurrentConditions, DailyForecast, ForecastSample};
