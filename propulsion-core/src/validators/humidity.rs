//! Relative Humidity Validation
//!
//! ## Physics Background
//!
//! Relative humidity (RH) is the ratio of the actual water-vapor partial
//! pressure to the saturation vapor pressure at the same temperature:
//!
//! ```text
//! RH = (Actual Vapor Pressure / Saturation Vapor Pressure) × 100%
//! ```
//!
//! The engine inverts this relationship to recover the actual vapor pressure
//! from a reported RH, so RH must lie in the closed interval [0, 100]:
//!
//! - Below 0% the vapor pressure would be negative.
//! - Above 100% the air would hold more vapor than saturation allows.
//!   Supersaturation does occur briefly in fog, but weather providers never
//!   report it, so a value above 100% signals a unit or transcription error
//!   (e.g. a 0-1 fraction multiplied twice).
//!
//! Unlike a sensor validator there is no drift allowance: the value is a
//! contract input, and a reading of 100.5% is rejected rather than clamped.

use crate::{
    errors::DomainResult,
    traits::{Validator, ValidatorConstraints},
};

use super::utils;

/// Field name reported in errors
pub const FIELD: &str = "relative_humidity_pct";

/// Driest possible air (%)
pub const HUMIDITY_MIN_PCT: f64 = 0.0;

/// Saturated air (%)
pub const HUMIDITY_MAX_PCT: f64 = 100.0;

/// Humidity validator for relative humidity percentage
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HumidityValidator;

impl Validator for HumidityValidator {
    type Value = f64;

    fn validate(&self, value: Self::Value) -> DomainResult<()> {
        utils::check_range(FIELD, value, HUMIDITY_MIN_PCT, HUMIDITY_MAX_PCT)
    }

    fn constraints(&self) -> ValidatorConstraints {
        ValidatorConstraints {
            field: FIELD,
            min_value: HUMIDITY_MIN_PCT,
            min_inclusive: true,
            max_value: Some(HUMIDITY_MAX_PCT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DomainError;

    #[test]
    fn valid_humidity() {
        let validator = HumidityValidator;
        assert!(validator.validate(0.0).is_ok());
        assert!(validator.validate(45.0).is_ok());
        assert!(validator.validate(100.0).is_ok());
    }

    #[test]
    fn humidity_out_of_range() {
        let validator = HumidityValidator;
        assert_eq!(
            validator.validate(150.0),
            Err(DomainError::OutOfRange {
                field: "relative_humidity_pct",
                value: 150.0,
                min: 0.0,
                max: 100.0,
            })
        );
        assert!(validator.validate(-0.1).is_err());
        assert!(validator.validate(100.000_001).is_err());
    }
}
