//! Input validation for timetabling domains.
//!
//! The engine never rejects a domain: empty sets and unknown courses are
//! absorbed as fitness penalties or initializer warnings. Hosts that want
//! to refuse malformed input up front call [`validate_domain`] before
//! running. Detects:
//! - Empty domain sets
//! - Duplicate course, teacher, room, or slot identifiers
//! - Blank identifiers
//! - Lecture counts for courses that are not defined

use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::TimetableError;
use crate::models::TimetableDomain;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ValidationErrorKind {
    /// A domain set has no members.
    EmptySet,
    /// Two members of one set share an identifier.
    DuplicateId,
    /// An identifier is empty or whitespace only.
    BlankId,
    /// `lectures_per_course` names a course that is not defined.
    UnknownCourse,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a domain before it is handed to the engine.
///
/// Checks:
/// 1. Courses, teachers, rooms, time slots, and lecture counts are non-empty
/// 2. No blank identifiers
/// 3. No duplicate identifiers within a set (rooms compare by name)
/// 4. Every `lectures_per_course` key is a defined course
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_domain(domain: &TimetableDomain) -> ValidationResult {
    let mut errors = Vec::new();

    let sets: [(&str, Vec<&str>); 4] = [
        ("course", domain.courses.iter().map(String::as_str).collect()),
        ("teacher", domain.teachers.iter().map(String::as_str).collect()),
        ("room", domain.rooms.iter().map(|r| r.name.as_str()).collect()),
        (
            "time slot",
            domain.time_slots.iter().map(String::as_str).collect(),
        ),
    ];

    for (label, ids) in &sets {
        check_set(label, ids, &mut errors);
    }

    if domain.lectures_per_course.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptySet,
            "No lecture counts defined",
        ));
    }

    // Sorted so the report order does not depend on hash order
    let mut unknown: Vec<&str> = domain
        .lectures_per_course
        .keys()
        .map(String::as_str)
        .filter(|c| !domain.has_course(c))
        .collect();
    unknown.sort_unstable();
    for course in unknown {
        errors.push(ValidationError::new(
            ValidationErrorKind::UnknownCourse,
            format!("Lecture count given for undefined course '{course}'"),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// [`validate_domain`] folded into a [`TimetableError`].
pub fn ensure_valid(domain: &TimetableDomain) -> Result<(), TimetableError> {
    validate_domain(domain).map_err(TimetableError::InvalidDomain)
}

fn check_set(label: &str, ids: &[&str], errors: &mut Vec<ValidationError>) {
    if ids.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptySet,
            format!("No {label}s defined"),
        ));
        return;
    }

    let mut seen = HashSet::new();
    for &id in ids {
        if id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankId,
                format!("Blank {label} identifier"),
            ));
            continue;
        }
        if !seen.insert(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate {label}: {id}"),
            ));
        }
    }
}
