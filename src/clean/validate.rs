// src/clean/validate.rs
use std::ops::RangeInclusive;

use super::convert_currency;

pub const AGE_RANGE: RangeInclusive<i64> = 15..=45;
pub const MAX_VALUE: f64 = 500_000_000.0;

/// Age in [15, 45]. Out of range is `None`, never clamped.
pub fn validate_age(age: i64) -> Option<i64> {
    if AGE_RANGE.contains(&age) {
        Some(age)
    } else {
        logw!("Age {age} outside valid range");
        None
    }
}

pub fn validate_age_text(age: &str) -> Option<i64> {
    match age.trim().parse::<i64>() {
        Ok(a) => validate_age(a),
        Err(_) => {
            logw!("Invalid age value: {age:?}");
            None
        }
    }
}

/// Monetary value in [0, 500M].
pub fn validate_value(value: f64) -> Option<f64> {
    if (0.0..=MAX_VALUE).contains(&value) {
        Some(value)
    } else {
        logw!("Value {value} outside valid range");
        None
    }
}

/// Currency text (`"€25M"`) converted, then range-checked.
pub fn validate_value_text(value: &str) -> Option<f64> {
    convert_currency(value).and_then(validate_value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_bounds_inclusive() {
        assert_eq!(validate_age(15), Some(15));
        assert_eq!(validate_age(45), Some(45));
        assert_eq!(validate_age(14), None);
        assert_eq!(validate_age(46), None);
    }

    #[test]
    fn age_from_text() {
        assert_eq!(validate_age_text(" 33 "), Some(33));
        assert_eq!(validate_age_text("60"), None);
        assert_eq!(validate_age_text("thirty"), None);
    }

    #[test]
    fn value_bounds() {
        assert_eq!(validate_value(0.0), Some(0.0));
        assert_eq!(validate_value(500_000_000.0), Some(500_000_000.0));
        assert_eq!(validate_value(500_000_001.0), None);
        assert_eq!(validate_value(-1.0), None);
        assert_eq!(validate_value(f64::NAN), None);
    }

    #[test]
    fn value_from_text() {
        assert_eq!(validate_value_text("€25M"), Some(25_000_000.0));
        assert_eq!(validate_value_text("€600M"), None);
        assert_eq!(validate_value_text("n/a"), None);
    }
}
