//! Station Pressure Validation
//!
//! ## Physics Background
//!
//! Station pressure is the absolute atmospheric pressure at the engine's
//! location, not reduced to sea level:
//!
//! ```text
//! 1013.25 hPa = 101,325 Pa = 1 atmosphere (sea level, ISA)
//! ```
//!
//! It drops roughly 12 hPa per 100 m of altitude, so a high-altitude airfield
//! legitimately reports 750 hPa. The only hard mathematical limit is that
//! pressure be strictly positive; the ideal-gas law produces zero or negative
//! density otherwise.
//!
//! Historical extremes at the surface:
//! - Lowest: 870 hPa (Typhoon Tip, 1979) at sea level
//! - Highest: 1084 hPa (Siberian High, 1968)
//!
//! The [`PressureValidator::strict`] preset also rejects values above
//! 1100 hPa, which almost always indicate a unit mix-up.

use crate::{
    constants::physics::SURFACE_PRESSURE_MAX_HPA,
    errors::DomainResult,
    traits::{Validator, ValidatorConstraints},
};

use super::utils;

/// Field name reported in errors
pub const FIELD: &str = "pressure_hpa";

/// Pressure validator for station pressure in hPa (hectopascals)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PressureValidator {
    /// Maximum valid pressure in hPa, if bounded
    max_hpa: Option<f64>,
}

impl PressureValidator {
    /// Create validator with an upper bound
    ///
    /// The bound must be finite and positive.
    pub fn new_with_max(max_hpa: f64) -> DomainResult<Self> {
        utils::check_above("pressure_max_hpa", max_hpa, 0.0)?;
        Ok(Self {
            max_hpa: Some(max_hpa),
        })
    }

    /// Reject pressures no surface station can report
    pub fn strict() -> Self {
        Self {
            max_hpa: Some(SURFACE_PRESSURE_MAX_HPA),
        }
    }
}

impl Validator for PressureValidator {
    type Value = f64;

    fn validate(&self, value: Self::Value) -> DomainResult<()> {
        utils::check_constraints(&self.constraints(), value)
    }

    fn constraints(&self) -> ValidatorConstraints {
        ValidatorConstraints {
            field: FIELD,
            min_value: 0.0,
            min_inclusive: false,
            max_value: self.max_hpa,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DomainError;

    #[test]
    fn valid_pressure_sea_level() {
        let validator = PressureValidator::default();
        assert!(validator.validate(1013.25).is_ok());
        // High-altitude airfield
        assert!(validator.validate(750.0).is_ok());
    }

    #[test]
    fn non_positive_pressure() {
        let validator = PressureValidator::default();
        assert!(matches!(
            validator.validate(0.0),
            Err(DomainError::BelowMinimum { field: "pressure_hpa", inclusive: false, .. })
        ));
        assert!(validator.validate(-5.0).is_err());
    }

    #[test]
    fn strict_rejects_unit_mixups() {
        let validator = PressureValidator::strict();
        assert!(validator.validate(1084.0).is_ok());
        // kPa typed as hPa would be 101.3; Pa typed as hPa is 101325
        assert!(validator.validate(101_325.0).is_err());
    }

    #[test]
    fn custom_max() {
        let validator = PressureValidator::new_with_max(900.0).unwrap();
        assert!(validator.validate(850.0).is_ok());
        assert!(validator.validate(950.0).is_err());

        assert!(PressureValidator::new_with_max(-1100.0).is_err());
        assert!(matches!(
            PressureValidator::new_with_max(f64::NAN),
            Err(DomainError::InvalidValue { field: "pressure_max_hpa" })
        ));
    }
}
