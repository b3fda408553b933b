//! Common Validation Utilities
//!
//! Shared checks used by every validator so that each field reports the same
//! error shape for the same kind of violation.
//!
//! All utilities are pure functions: no side effects, no allocation, and an
//! invalid input always yields an error rather than a substituted value.
//!
//! ## Check Order
//!
//! Finiteness is always checked first. NaN compares false against every
//! bound, so a range check alone would let it through.
//!
//! ```text
//! check_range(NaN, 0, 100)   -> would pass both `<` tests
//! check_finite(NaN)          -> InvalidValue
//! ```

use crate::{
    errors::{DomainError, DomainResult},
    traits::{Validatable, ValidatorConstraints},
};

/// Reject NaN and infinities
pub fn check_finite(field: &'static str, value: f64) -> DomainResult<()> {
    if value.is_valid() {
        Ok(())
    } else {
        Err(DomainError::InvalidValue { field })
    }
}

/// Check if a value is within the closed range `[min, max]`
pub fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> DomainResult<()> {
    check_finite(field, value)?;
    if value < min || value > max {
        Err(DomainError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    } else {
        Ok(())
    }
}

/// Check that a value is strictly greater than `min`
pub fn check_above(field: &'static str, value: f64, min: f64) -> DomainResult<()> {
    check_finite(field, value)?;
    if value > min {
        Ok(())
    } else {
        Err(DomainError::BelowMinimum {
            field,
            value,
            min,
            inclusive: false,
        })
    }
}

/// Check that a value is at least `min`
pub fn check_at_least(field: &'static str, value: f64, min: f64) -> DomainResult<()> {
    check_finite(field, value)?;
    if value >= min {
        Ok(())
    } else {
        Err(DomainError::BelowMinimum {
            field,
            value,
            min,
            inclusive: true,
        })
    }
}

/// Apply a full set of validator constraints
pub fn check_constraints(constraints: &ValidatorConstraints, value: f64) -> DomainResult<()> {
    let field = constraints.field;
    match constraints.max_value {
        Some(max) if constraints.min_inclusive => check_range(field, value, constraints.min_value, max),
        Some(max) => {
            check_above(field, value, constraints.min_value)?;
            if value > max {
                return Err(DomainError::OutOfRange {
                    field,
                    value,
                    min: constraints.min_value,
                    max,
                });
            }
            Ok(())
        }
        None if constraints.min_inclusive => check_at_least(field, value, constraints.min_value),
        None => check_above(field, value, constraints.min_value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_check() {
        assert!(check_range("x", 5.0, 0.0, 10.0).is_ok());
        assert!(check_range("x", 0.0, 0.0, 10.0).is_ok());
        assert!(check_range("x", 10.0, 0.0, 10.0).is_ok());
        assert!(check_range("x", -1.0, 0.0, 10.0).is_err());
        assert!(check_range("x", 11.0, 0.0, 10.0).is_err());
    }

    #[test]
    fn nan_is_never_in_range() {
        assert_eq!(
            check_range("x", f64::NAN, 0.0, 10.0),
            Err(DomainError::InvalidValue { field: "x" })
        );
        assert!(check_above("x", f64::INFINITY, 0.0).is_err());
    }

    #[test]
    fn strict_and_inclusive_minimum() {
        assert!(check_above("x", 0.0, 0.0).is_err());
        assert!(check_at_least("x", 0.0, 0.0).is_ok());
        assert!(matches!(
            check_at_least("x", -0.1, 0.0),
            Err(DomainError::BelowMinimum { inclusive: true, .. })
        ));
    }

    #[test]
    fn constraints_dispatch() {
        let c = ValidatorConstraints {
            field: "temperature_c",
            min_value: -243.5,
            min_inclusive: false,
            max_value: Some(60.0),
        };
        assert!(check_constraints(&c, 25.0).is_ok());
        assert!(matches!(
            check_constraints(&c, -243.5),
            Err(DomainError::BelowMinimum { .. })
        ));
        assert_eq!(
            check_constraints(&c, 61.0),
            Err(DomainError::OutOfRange {
                field: "temperature_c",
                value: 61.0,
                min: -243.5,
                max: 60.0,
            })
        );
    }
}
