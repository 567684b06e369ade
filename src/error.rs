//! Error types for the timetabling engine.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors surfaced by the timetabling engine.
///
/// Data-quality problems inside a run (missing room capacity, unknown
/// courses, exhausted domains) are never errors; they are folded into the
/// fitness score. Only contract violations and the empty-population
/// condition reach the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimetableError {
    /// A [`GaConfig`](crate::ga::GaConfig) parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The domain sets failed [`validate_domain`](crate::validation::validate_domain).
    #[error("invalid domain: {} issue(s), first: {}", .0.len(), first_message(.0))]
    InvalidDomain(Vec<ValidationError>),

    /// The population was empty when a generation began evaluation.
    #[error("population became empty at generation {generation}")]
    EmptyPopulation {
        /// Zero-based generation index at which the population was empty.
        generation: usize,
    },
}

fn first_message(errors: &[ValidationError]) -> &str {
    errors.first().map(|e| e.message.as_str()).unwrap_or("none")
}

/// Result alias for timetabling operations.
pub type TimetableResult<T> = Result<T, TimetableError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_display_messages() {
        let err = TimetableError::InvalidConfig("tournament_size must be at least 1".into());
        assert_eq!(
            err.to_string(),
            "invalid configuration: tournament_size must be at least 1"
        );

        let err = TimetableError::EmptyPopulation { generation: 0 };
        assert_eq!(err.to_string(), "population became empty at generation 0");
    }

    #[test]
    fn test_invalid_domain_reports_first_issue() {
        let err = TimetableError::InvalidDomain(vec![
            ValidationError {
                kind: ValidationErrorKind::EmptySet,
                message: "no teachers defined".into(),
            },
            ValidationError {
                kind: ValidationErrorKind::EmptySet,
                message: "no rooms defined".into(),
            },
        ]);
        assert_eq!(
            err.to_string(),
            "invalid domain: 2 issue(s), first: no teachers defined"
        );
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TimetableError>();
    }
}
