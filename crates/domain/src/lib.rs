//! Domain layer for SkyCast
//!
//! Contains the pure weather core: value objects, entities, and the forecast
//! grouping logic. This layer has no I/O and no knowledge of any provider.

pub mod entities;
pub mod errors;
pub mod forecast_grouping;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use forecast_grouping::group_by_day;
pub use value_objects::*;
