//! Temperature value object
//!
//! A temperature always carries the unit system it is expressed in. Display
//! formatting and conversion both read that unit, so a value can never be
//! converted twice or rendered with the wrong suffix.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::{Temperature, UnitSystem};
//!
//! let t = Temperature::new(25.0, UnitSystem::Metric);
//! assert_eq!(t.convert_to(UnitSystem::Imperial).value(), 77.0);
//! assert_eq!(format!("{t}"), "25.0°C");
//! ```

use crate::value_objects::UnitSystem;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A temperature tagged with its unit system
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    value: f64,
    unit: UnitSystem,
}

impl Temperature {
    /// Create a temperature in the given unit system
    #[must_use]
    pub const fn new(value: f64, unit: UnitSystem) -> Self {
        Self { value, unit }
    }

    /// The numeric value, in this temperature's own unit
    #[must_use]
    pub const fn value(self) -> f64 {
        self.value
    }

    /// The unit system this value is expressed in
    #[must_use]
    pub const fn unit(self) -> UnitSystem {
        self.unit
    }

    /// Convert to the target unit system
    ///
    /// Converting to the unit the value is already in returns the value
    /// bit-for-bit unchanged; no floating-point drift is introduced.
    #[must_use]
    pub fn convert_to(self, target: UnitSystem) -> Self {
        let value = match (self.unit, target) {
            (UnitSystem::Metric, UnitSystem::Metric)
            | (UnitSystem::Imperial, UnitSystem::Imperial) => self.value,
            (UnitSystem::Metric, UnitSystem::Imperial) => self.value * 9.0 / 5.0 + 32.0,
            (UnitSystem::Imperial, UnitSystem::Metric) => (self.value - 32.0) * 5.0 / 9.0,
        };
        Self {
            value,
            unit: target,
        }
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}{}", self.value, self.unit.temperature_suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_unit_conversion_is_identity() {
        let t = Temperature::new(21.37, UnitSystem::Metric);
        let converted = t.convert_to(UnitSystem::Metric);
        assert_eq!(converted.value().to_bits(), 21.37f64.to_bits());
        assert_eq!(converted.unit(), UnitSystem::Metric);
    }

    #[test]
    fn metric_to_imperial() {
        let freezing = Temperature::new(0.0, UnitSystem::Metric);
        assert!((freezing.convert_to(UnitSystem::Imperial).value() - 32.0).abs() < 1e-12);

        let boiling = Temperature::new(100.0, UnitSystem::Metric);
        assert!((boiling.convert_to(UnitSystem::Imperial).value() - 212.0).abs() < 1e-12);
    }

    #[test]
    fn imperial_to_metric() {
        let body = Temperature::new(98.6, UnitSystem::Imperial);
        assert!((body.convert_to(UnitSystem::Metric).value() - 37.0).abs() < 1e-9);
    }

    #[test]
    fn round_trip_is_close() {
        let original = Temperature::new(23.4, UnitSystem::Metric);
        let round_tripped = original
            .convert_to(UnitSystem::Imperial)
            .convert_to(UnitSystem::Metric);
        assert!((round_tripped.value() - original.value()).abs() < 1e-9);
    }

    #[test]
    fn conversion_retargets_unit() {
        let t = Temperature::new(15.0, UnitSystem::Metric).convert_to(UnitSystem::Imperial);
        assert_eq!(t.unit(), UnitSystem::Imperial);
    }

    #[test]
    fn display_appends_unit_suffix() {
        assert_eq!(
            Temperature::new(21.5, UnitSystem::Metric).to_string(),
            "21.5°C"
        );
        assert_eq!(
            Temperature::new(70.7, UnitSystem::Imperial).to_string(),
            "70.7°F"
        );
    }

    #[test]
    fn display_rounds_to_one_decimal() {
        assert_eq!(
            Temperature::new(21.449, UnitSystem::Metric).to_string(),
            "21.4°C"
        );
        assert_eq!(
            Temperature::new(-0.04, UnitSystem::Metric).to_string(),
            "-0.0°C"
        );
    }

    #[test]
    fn serde_round_trip() {
        let t = Temperature::new(12.3, UnitSystem::Imperial);
        let json = serde_json::to_string(&t).unwrap();
        let parsed: Temperature = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, t);
    }
}
