//! Error Types for Out-of-Domain Inputs
//!
//! ## Design Philosophy
//!
//! Every failure the derivation engine can produce is a *domain* failure: an
//! input that lies outside the range where the physical formulas or the
//! heuristic classifications are defined. There are no I/O errors, no retries
//! and no partial results.
//!
//! 1. **Small Size**: Variants carry only `f64` values and `&'static str`
//!    field names, so the error is `Copy` and never allocates.
//!
//! 2. **Never Clamped**: A bad input is reported, not corrected. Humidity of
//!    150% is an error, not 100%.
//!
//! 3. **Actionable Information**: Each variant names the offending field and
//!    the limit it crossed, so the caller can re-prompt or abort.
//!
//! ## Error Categories
//!
//! ### Per-Field Violations
//! - `InvalidValue`: NaN or infinity
//! - `OutOfRange`: Outside a closed interval (relative humidity 0-100%)
//! - `BelowMinimum`: Under a one-sided limit (pressure > 0, rated power > 0)
//!
//! ### Cross-Field Violations
//! - `InconsistentPressure`: Vapor pressure exceeds total station pressure
//!
//! ### Configuration
//! - `InvalidConfig`: Threshold overrides that are unordered or out of range
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use propulsion_core::{run, DomainError, EnvironmentalReading, WindDirection};
//!
//! let reading = EnvironmentalReading {
//!     temperature_c: 25.0,
//!     pressure_hpa: 1013.25,
//!     relative_humidity_pct: 150.0,
//!     wind_speed_mph: 10.0,
//!     wind_direction: WindDirection::Offshore,
//!     distance_to_coast_km: 50.0,
//!     pm2_5_ugm3: 20.0,
//! };
//!
//! match run(&reading, 300.0) {
//!     Ok(_metrics) => {}
//!     Err(DomainError::OutOfRange { field, .. }) => {
//!         // Re-prompt the operator for this field
//!         assert_eq!(field, "relative_humidity_pct");
//!     }
//!     Err(_) => {}
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for derivation operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Input outside its physically or mathematically valid domain
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DomainError {
    /// Value is NaN or infinite
    #[error("{field}: not a finite number")]
    InvalidValue {
        /// Name of the offending input
        field: &'static str,
    },

    /// Value outside a closed interval
    #[error("{field}: value {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// Name of the offending input
        field: &'static str,
        /// The rejected value
        value: f64,
        /// Lowest accepted value
        min: f64,
        /// Highest accepted value
        max: f64,
    },

    /// Value at or under a one-sided lower limit
    #[error("{field}: value {value} below minimum {min}")]
    BelowMinimum {
        /// Name of the offending input
        field: &'static str,
        /// The rejected value
        value: f64,
        /// The limit
        min: f64,
        /// Whether `value == min` is accepted
        inclusive: bool,
    },

    /// Water-vapor partial pressure exceeds the total station pressure
    #[error("vapor pressure {vapor_pressure_hpa} hPa exceeds total pressure {pressure_hpa} hPa")]
    InconsistentPressure {
        /// Actual vapor pressure (hPa)
        vapor_pressure_hpa: f64,
        /// Total station pressure (hPa)
        pressure_hpa: f64,
    },

    /// Threshold configuration cannot be applied
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Which constraint the configuration broke
        reason: &'static str,
    },
}

impl DomainError {
    /// Name of the input that caused the error, if the error concerns a single field
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidValue { field }
            | Self::OutOfRange { field, .. }
            | Self::BelowMinimum { field, .. } => Some(*field),
            Self::InconsistentPressure { .. } | Self::InvalidConfig { .. } => None,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DomainError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidValue { field } =>
                defmt::write!(fmt, "{}: not finite", field),
            Self::OutOfRange { field, value, min, max } =>
                defmt::write!(fmt, "{}: {} outside [{}, {}]", field, value, min, max),
            Self::BelowMinimum { field, value, min, .. } =>
                defmt::write!(fmt, "{}: {} below {}", field, value, min),
            Self::InconsistentPressure { vapor_pressure_hpa, pressure_hpa } =>
                defmt::write!(fmt, "vapor {} hPa > total {} hPa", vapor_pressure_hpa, pressure_hpa),
            Self::InvalidConfig { reason } =>
                defmt::write!(fmt, "invalid config: {}", reason),
        }
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use std::string::ToString;

    #[test]
    fn messages_name_the_field() {
        let err = DomainError::OutOfRange {
            field: "relative_humidity_pct",
            value: 150.0,
            min: 0.0,
            max: 100.0,
        };
        assert_eq!(
            err.to_string(),
            "relative_humidity_pct: value 150 outside range [0, 100]"
        );
    }

    #[test]
    fn below_minimum_message() {
        let err = DomainError::BelowMinimum {
            field: "rated_power",
            value: 0.0,
            min: 0.0,
            inclusive: false,
        };
        assert_eq!(err.to_string(), "rated_power: value 0 below minimum 0");
    }

    #[test]
    fn field_accessor() {
        assert_eq!(
            DomainError::InvalidValue { field: "temperature_c" }.field(),
            Some("temperature_c")
        );
        assert_eq!(DomainError::InvalidConfig { reason: "x" }.field(), None);
    }
}
