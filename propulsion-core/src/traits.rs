//! Core traits for validators
//!
//! These traits define the interface every input validator implements.
//! Keep them simple - the engine only needs single-field and whole-reading checks.

use crate::errors::DomainResult;

/// Single-field validator
pub trait Validator {
    /// The type of value this validator handles
    type Value;

    /// Validate a single value
    fn validate(&self, value: Self::Value) -> DomainResult<()>;

    /// Get the domain limits enforced by this validator
    fn constraints(&self) -> ValidatorConstraints;
}

/// Domain limits for a validator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatorConstraints {
    /// Name of the validated input
    pub field: &'static str,

    /// Lowest accepted value
    pub min_value: f64,

    /// Whether `min_value` itself is accepted
    pub min_inclusive: bool,

    /// Highest accepted value, if bounded
    pub max_value: Option<f64>,
}

impl ValidatorConstraints {
    /// Check a value against these limits without producing an error
    pub fn contains(&self, value: f64) -> bool {
        let above_min = if self.min_inclusive {
            value >= self.min_value
        } else {
            value > self.min_value
        };
        above_min && self.max_value.map_or(true, |max| value <= max)
    }
}

/// Cross-validator for multi-field consistency
pub trait CrossValidator {
    /// Input type (usually a whole record)
    type Input;

    /// Validate related fields together
    fn cross_validate(&self, inputs: Self::Input) -> DomainResult<()>;
}

/// Trait for values that can be validated
pub trait Validatable {
    /// Check if the value is a usable number (not NaN, not infinite)
    fn is_valid(&self) -> bool;
}

impl Validatable for f32 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraints_contains() {
        let open_below = ValidatorConstraints {
            field: "pressure_hpa",
            min_value: 0.0,
            min_inclusive: false,
            max_value: None,
        };
        assert!(!open_below.contains(0.0));
        assert!(open_below.contains(0.001));
        assert!(open_below.contains(1e9));

        let closed = ValidatorConstraints {
            field: "relative_humidity_pct",
            min_value: 0.0,
            min_inclusive: true,
            max_value: Some(100.0),
        };
        assert!(closed.contains(0.0));
        assert!(closed.contains(100.0));
        assert!(!closed.contains(100.01));
    }

    #[test]
    fn validatable_floats() {
        assert!(5.0f64.is_valid());
        assert!(!f64::NAN.is_valid());
        assert!(!f64::NEG_INFINITY.is_valid());
        assert!(!f32::INFINITY.is_valid());
    }
}
