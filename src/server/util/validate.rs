//! Field validators shared by the request-to-params conversions.
//!
//! Each helper records a failure into the supplied `ValidationErrors` and returns the
//! cleaned value when the field is acceptable, so callers can validate every field of a
//! request before deciding whether to reject it.

use std::sync::LazyLock;

use regex::Regex;

use crate::server::error::validation::ValidationErrors;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$")
        .unwrap_or_else(|e| panic!("invalid email pattern: {e}"))
});

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?[0-9\s().\-]+$").unwrap_or_else(|e| panic!("invalid phone pattern: {e}"))
});

/// Returns the trimmed value when present and non-empty; records `message` otherwise.
pub fn required(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<String>,
    message: &str,
) -> Option<String> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Some(v),
        _ => {
            errors.add(field, message);
            None
        }
    }
}

/// Like [`required`] for fields that may be omitted but must not be blank when sent.
pub fn not_blank(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<String>,
    message: &str,
) -> Option<String> {
    value.and_then(|v| required(errors, field, Some(v), message))
}

/// Checks the character count of `value` lies within `min..=max`.
pub fn length_between(
    errors: &mut ValidationErrors,
    field: &str,
    value: String,
    min: usize,
    max: usize,
    message: &str,
) -> Option<String> {
    let len = value.chars().count();
    if (min..=max).contains(&len) {
        Some(value)
    } else {
        errors.add(field, message);
        None
    }
}

/// Validates an email address and returns it lowercased.
pub fn email(errors: &mut ValidationErrors, field: &str, value: String) -> Option<String> {
    if EMAIL_RE.is_match(&value) {
        Some(value.to_lowercase())
    } else {
        errors.add(field, "Invalid email address");
        None
    }
}

/// Validates a phone number and returns only its digits (8 to 15 of them).
pub fn phone(errors: &mut ValidationErrors, field: &str, value: String) -> Option<String> {
    let digits = digits_only(&value);
    if PHONE_RE.is_match(&value) && (8..=15).contains(&digits.len()) {
        Some(digits)
    } else {
        errors.add(field, "Invalid phone number");
        None
    }
}

/// Checks an optional coordinate is finite and within `-limit..=limit`.
pub fn coordinate(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<f64>,
    limit: f64,
    message: &str,
) -> Option<f64> {
    match value {
        Some(v) if v.is_finite() && (-limit..=limit).contains(&v) => Some(v),
        Some(_) => {
            errors.add(field, message);
            None
        }
        None => None,
    }
}

/// Checks an integer is non-negative and fits in an `i32` column.
pub fn non_negative_i32(
    errors: &mut ValidationErrors,
    field: &str,
    value: i64,
    message: &str,
) -> Option<i32> {
    match i32::try_from(value) {
        Ok(v) if v >= 0 => Some(v),
        _ => {
            errors.add(field, message);
            None
        }
    }
}

pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}
