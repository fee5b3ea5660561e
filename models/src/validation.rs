// models/src/validation.rs

//! Field-level checks applied to inbound payloads before anything reaches SQL.

use serde_json::Number;

use crate::errors::{ValidationError, ValidationResult};

// Largest integer an f64 represents exactly.
const MAX_EXACT_FLOAT_INT: f64 = 9_007_199_254_740_992.0;

/// Upper bound of the signed 32-bit `INT` columns the values are stored in.
pub const MAX_INT_COLUMN: i64 = i32::MAX as i64;

/// Numeric kind of a lab measurement column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Measure {
    Integer,
    Float,
}

/// Reads a JSON number as an integer. `12` and `12.0` pass, `12.5` does not.
pub fn integral(field: &'static str, n: &Number) -> ValidationResult<i64> {
    if let Some(i) = n.as_i64() {
        return Ok(i);
    }
    if n.is_u64() {
        // Above i64::MAX: integral, but never inside any range we accept.
        return Err(ValidationError::ConstraintViolated {
            field,
            constraint: "within the 64-bit integer range",
        });
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() <= MAX_EXACT_FLOAT_INT => Ok(f as i64),
        _ => Err(ValidationError::NotAnInteger(field)),
    }
}

pub fn integer_in_range(
    field: &'static str,
    n: &Number,
    min: i64,
    max: i64,
    constraint: &'static str,
) -> ValidationResult<i64> {
    let value = integral(field, n)?;
    if value < min || value > max {
        return Err(ValidationError::ConstraintViolated { field, constraint });
    }
    Ok(value)
}

pub fn age(n: &Number) -> ValidationResult<i64> {
    integer_in_range("age", n, 0, 120, "an integer between 0 and 120")
}

/// A 0/1 flag such as the diagnosis outcome.
pub fn flag(field: &'static str, n: &Number) -> ValidationResult<i64> {
    integer_in_range(field, n, 0, 1, "0 or 1")
}

/// A reference to another row's system-assigned identifier.
pub fn reference_id(field: &'static str, n: &Number) -> ValidationResult<u64> {
    let value = integer_in_range(field, n, 1, MAX_INT_COLUMN, "a positive identifier below 2^31")?;
    Ok(value as u64)
}

pub fn non_negative_integer(field: &'static str, n: &Number) -> ValidationResult<i64> {
    integer_in_range(field, n, 0, MAX_INT_COLUMN, "an integer between 0 and 2147483647")
}

pub fn non_negative_float(field: &'static str, n: &Number) -> ValidationResult<f64> {
    let value = n.as_f64().ok_or(ValidationError::NotFinite(field))?;
    if !value.is_finite() {
        return Err(ValidationError::NotFinite(field));
    }
    if value < 0.0 {
        return Err(ValidationError::ConstraintViolated { field, constraint: ">= 0" });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(v: serde_json::Value) -> Number {
        match v {
            serde_json::Value::Number(n) => n,
            other => panic!("not a number: {other}"),
        }
    }

    #[test]
    fn age_bounds_are_inclusive() {
        assert_eq!(age(&num(serde_json::json!(0))), Ok(0));
        assert_eq!(age(&num(serde_json::json!(120))), Ok(120));
        assert!(matches!(
            age(&num(serde_json::json!(121))),
            Err(ValidationError::ConstraintViolated { field: "age", .. })
        ));
        assert!(age(&num(serde_json::json!(-1))).is_err());
    }

    #[test]
    fn integral_floats_are_integers_fractions_are_not() {
        assert_eq!(age(&num(serde_json::json!(45.0))), Ok(45));
        assert_eq!(
            non_negative_integer("alkaline_phosphotase", &num(serde_json::json!(187.5))),
            Err(ValidationError::NotAnInteger("alkaline_phosphotase"))
        );
    }

    #[test]
    fn flag_accepts_only_zero_and_one() {
        assert_eq!(flag("diagnosis", &num(serde_json::json!(1))), Ok(1));
        assert!(flag("diagnosis", &num(serde_json::json!(2))).is_err());
    }

    #[test]
    fn floats_must_be_non_negative() {
        assert_eq!(non_negative_float("albumin", &num(serde_json::json!(0))), Ok(0.0));
        assert_eq!(
            non_negative_float("albumin", &num(serde_json::json!(-0.1))),
            Err(ValidationError::ConstraintViolated { field: "albumin", constraint: ">= 0" })
        );
    }

    #[test]
    fn reference_ids_are_positive() {
        assert_eq!(reference_id("patient_id", &num(serde_json::json!(3))), Ok(3));
        assert!(reference_id("patient_id", &num(serde_json::json!(0))).is_err());
        assert!(reference_id("patient_id", &num(serde_json::json!(u64::MAX))).is_err());
        assert!(reference_id("patient_id", &num(serde_json::json!(2_147_483_648i64))).is_err());
    }

    #[test]
    fn integer_measurements_fit_an_int_column() {
        assert_eq!(
            non_negative_integer("alkaline_phosphotase", &num(serde_json::json!(2_147_483_647i64))),
            Ok(MAX_INT_COLUMN)
        );
        assert!(matches!(
            non_negative_integer("alkaline_phosphotase", &num(serde_json::json!(2_147_483_648i64))),
            Err(ValidationError::ConstraintViolated { field: "alkaline_phosphotase", .. })
        ));
        assert!(non_negative_integer("alkaline_phosphotase", &num(serde_json::json!(-1))).is_err());
    }
}
