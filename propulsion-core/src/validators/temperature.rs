//! Temperature validator with physics constraints
//!
//! Validates ambient dry-bulb temperature based on:
//! - The pole of the Magnus approximation (`T + 243.5` must stay positive),
//!   which also keeps the reading above absolute zero
//! - Optional Earth-surface plausibility limits

use crate::{
    constants::physics::{MAGNUS_B_C, SURFACE_TEMP_MAX_C, SURFACE_TEMP_MIN_C},
    errors::{DomainError, DomainResult},
    traits::{Validator, ValidatorConstraints},
};

use super::utils;

/// Field name reported in errors
pub const FIELD: &str = "temperature_c";

/// Lowest temperature any formula in the engine accepts (exclusive, °C)
pub const MAGNUS_POLE_C: f64 = -MAGNUS_B_C;

/// Temperature validator for Celsius readings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureValidator {
    /// Minimum valid temperature in Celsius
    min_celsius: f64,

    /// Whether `min_celsius` itself is accepted
    min_inclusive: bool,

    /// Maximum valid temperature in Celsius, if bounded
    max_celsius: Option<f64>,
}

impl Default for TemperatureValidator {
    fn default() -> Self {
        Self {
            // Magnus formula denominator vanishes at -243.5°C
            min_celsius: MAGNUS_POLE_C,
            min_inclusive: false,
            max_celsius: None,
        }
    }
}

impl TemperatureValidator {
    /// Create validator with custom limits
    ///
    /// Limits must be finite, ordered, and leave some room above the Magnus
    /// pole. A minimum at or below the pole is tightened to the pole itself
    /// (exclusive), since no formula is defined there.
    pub fn new_with_limits(min: f64, max: f64) -> DomainResult<Self> {
        utils::check_finite("temperature_min_c", min)?;
        utils::check_finite("temperature_max_c", max)?;
        if min > max {
            return Err(DomainError::InvalidConfig {
                reason: "temperature minimum above maximum",
            });
        }
        utils::check_above("temperature_max_c", max, MAGNUS_POLE_C)?;

        let (min_celsius, min_inclusive) = if min <= MAGNUS_POLE_C {
            (MAGNUS_POLE_C, false)
        } else {
            (min, true)
        };
        Ok(Self {
            min_celsius,
            min_inclusive,
            max_celsius: Some(max),
        })
    }

    /// Earth-surface air temperatures only
    pub fn strict() -> Self {
        Self {
            min_celsius: SURFACE_TEMP_MIN_C,
            min_inclusive: true,
            max_celsius: Some(SURFACE_TEMP_MAX_C),
        }
    }
}

impl Validator for TemperatureValidator {
    type Value = f64;

    fn validate(&self, value: Self::Value) -> DomainResult<()> {
        utils::check_constraints(&self.constraints(), value)
    }

    fn constraints(&self) -> ValidatorConstraints {
        ValidatorConstraints {
            field: FIELD,
            min_value: self.min_celsius,
            min_inclusive: self.min_inclusive,
            max_value: self.max_celsius,
        }
    }
}
