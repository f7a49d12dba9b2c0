//! Shared parsing helpers for the raw web forms. The scorers never see a
//! value these helpers have not accepted.

use chrono::NaiveDate;

/// Validation errors raised while converting a raw form into a typed profile.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("field '{field}' expects 'true' or 'false', got '{value}'")]
    InvalidBoolean { field: &'static str, value: String },
    #[error("field '{field}' has no option '{value}'")]
    UnknownOption { field: &'static str, value: String },
    #[error("field '{field}' must be a non-negative whole number, got '{value}'")]
    InvalidNumber { field: &'static str, value: String },
    #[error("field '{field}' must be an ISO date (YYYY-MM-DD), got '{value}'")]
    InvalidDate { field: &'static str, value: String },
    #[error("target year {0} is outside the supported range (2025 through 9999)")]
    TargetYearOutOfRange(i32),
}

pub(crate) fn parse_flag(field: &'static str, value: String) -> Result<bool, IntakeError> {
    match value.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(IntakeError::InvalidBoolean { field, value }),
    }
}

pub(crate) fn parse_count(field: &'static str, value: String) -> Result<u32, IntakeError> {
    match value.trim().parse::<u32>() {
        Ok(parsed) => Ok(parsed),
        Err(_) => Err(IntakeError::InvalidNumber { field, value }),
    }
}

pub(crate) fn parse_year(field: &'static str, value: String) -> Result<i32, IntakeError> {
    match value.trim().parse::<i32>() {
        Ok(parsed) => Ok(parsed),
        Err(_) => Err(IntakeError::InvalidNumber { field, value }),
    }
}

pub(crate) fn parse_iso_date(field: &'static str, value: String) -> Result<NaiveDate, IntakeError> {
    match NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
        Ok(date) => Ok(date),
        Err(_) => Err(IntakeError::InvalidDate { field, value }),
    }
}
