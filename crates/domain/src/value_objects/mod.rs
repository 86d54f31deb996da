//! Value objects for the weather domain

mod condition_class;
mod humidity;
mod temperature;
mod unit_system;

pub use condition_class::ConditionClass;
pub use humidity::Humidity;
pub use temperature::Temperature;
pub use unit_system::UnitSystem;
