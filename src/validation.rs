//! Input validation for roster requests.
//!
//! Checks a [`RosterRequest`] before generation and reports every problem
//! at once. Detects:
//! - Invalid period (month outside 1–12, non-positive year)
//! - Duplicate employee IDs
//! - Override entries for employees not on the request
//! - Override dates that are not `YYYY-MM-DD`
//! - Override dates outside the requested month
//!
//! Only the first is fatal to generation. The generator tolerates the
//! rest (unknown and out-of-period overrides are ignored), so callers may
//! treat them as warnings.

use std::collections::HashSet;

use crate::models::{parse_iso_date, OverrideMap, Period};
use crate::scheduler::RosterRequest;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Month outside 1–12 or non-positive year.
    InvalidPeriod,
    /// Two employees share the same ID.
    DuplicateId,
    /// An override map names an employee not on the request.
    UnknownEmployee,
    /// An override date is not a valid ISO date.
    MalformedDate,
    /// An override date lies outside the requested month.
    DateOutOfPeriod,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Whether this error stops generation.
    pub fn is_fatal(&self) -> bool {
        self.kind == ValidationErrorKind::InvalidPeriod
    }
}

/// Validates a roster request.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(request: &RosterRequest) -> ValidationResult {
    let mut errors = Vec::new();

    let period = match Period::new(request.year, request.month) {
        Ok(period) => Some(period),
        Err(err) => {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidPeriod,
                err.to_string(),
            ));
            None
        }
    };

    let mut employee_ids = HashSet::new();
    for emp in &request.employees {
        if !employee_ids.insert(emp.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate employee ID: {}", emp.id),
            ));
        }
    }

    check_overrides("vacation", &request.vacation_days, &employee_ids, period, &mut errors);
    check_overrides("leave", &request.leave_days, &employee_ids, period, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_overrides(
    label: &str,
    overrides: &OverrideMap,
    employee_ids: &HashSet<&str>,
    period: Option<Period>,
    errors: &mut Vec<ValidationError>,
) {
    for (employee_id, dates) in overrides {
        if !employee_ids.contains(employee_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownEmployee,
                format!("{label} entry references unknown employee '{employee_id}'"),
            ));
        }

        for date in dates {
            if parse_iso_date(date).is_none() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::MalformedDate,
                    format!("{label} date '{date}' for '{employee_id}' is not YYYY-MM-DD"),
                ));
                continue;
            }
            if let Some(period) = period {
                if period.day_index(date).is_none() {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::DateOutOfPeriod,
                        format!(
                            "{label} date '{date}' for '{employee_id}' is outside {}-{:02}",
                            period.year, period.month
                        ),
                    ));
                }
            }
        }
    }
}
