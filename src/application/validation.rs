//! Field rules applied to raw text input before any store call.
//!
//! All functions here are pure. A record is validated field by field in
//! declaration order and the first failure rejects the whole submission.

use crate::domain::{NewCourtRecord, NewCriminal, NewVictim, ValidationError};

/// Trimmed value of a mandatory text field.
pub fn require_text(field: &'static str, raw: &str) -> Result<String, ValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(value.to_string())
}

/// Non-negative integer from a field that must hold only ASCII digits.
pub fn require_digits(field: &'static str, raw: &str) -> Result<i64, ValidationError> {
    let value = raw.trim();
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::NotDigits { field });
    }
    // Digits only, so the sole parse failure left is overflow.
    value
        .parse::<i64>()
        .map_err(|_| ValidationError::OutOfRange { field })
}

pub fn validate_criminal(
    name: &str,
    age: &str,
    address: &str,
    crime: &str,
) -> Result<NewCriminal, ValidationError> {
    Ok(NewCriminal {
        name: require_text("name", name)?,
        age: require_digits("age", age)?,
        address: require_text("address", address)?,
        crime: require_text("crime", crime)?,
    })
}

pub fn validate_victim(
    name: &str,
    age: &str,
    address: &str,
    report: &str,
) -> Result<NewVictim, ValidationError> {
    Ok(NewVictim {
        name: require_text("name", name)?,
        age: require_digits("age", age)?,
        address: require_text("address", address)?,
        report: require_text("report", report)?,
    })
}

/// The referenced criminal is not looked up.
pub fn validate_court_record(
    criminal_id: &str,
    judge_name: &str,
    verdict: &str,
) -> Result<NewCourtRecord, ValidationError> {
    Ok(NewCourtRecord {
        criminal_id: require_digits("criminal_id", criminal_id)?,
        judge_name: require_text("judge_name", judge_name)?,
        verdict: require_text("verdict", verdict)?,
    })
}
