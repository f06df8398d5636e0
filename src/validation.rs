//! Input validation for process lists.
//!
//! The scheduling policies never validate their input; this pass is run by
//! callers (the CLI does) before simulating. Detects:
//! - Duplicate process IDs
//! - Negative arrival times
//! - Negative burst times
//! - Arrival or burst times above `i32::MAX`
//!
//! Zero burst times are accepted: every policy handles them.

use crate::models::Process;
use std::collections::HashSet;

/// Largest accepted arrival or burst time. Keeps every policy clock
/// within i64 for any realistic process count.
pub const MAX_TIME: i64 = i32::MAX as i64;

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
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process requires negative CPU time.
    NegativeBurst,
    /// An arrival or burst time exceeds [`MAX_TIME`].
    TimeOutOfRange,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process list.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process {} has negative arrival time {}", p.id, p.arrival_time),
            ));
        }

        if p.burst_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeBurst,
                format!("Process {} has negative burst time {}", p.id, p.burst_time),
            ));
        }

        if p.arrival_time > MAX_TIME || p.burst_time > MAX_TIME {
            errors.push(ValidationError::new(
                ValidationErrorKind::TimeOutOfRange,
                format!(
                    "Process {} has arrival {} / burst {} above {}",
                    p.id, p.arrival_time, p.burst_time, MAX_TIME
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        let processes = vec![Process::new(1, 0, 4), Process::new(2, 1, 0)];
        assert!(validate_processes(&processes).is_ok());
    }

    #[test]
    fn test_empty_input_is_valid() {
        assert!(validate_processes(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_id() {
        let processes = vec![Process::new(1, 0, 4), Process::new(1, 2, 3)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
    }

    #[test]
    fn test_time_above_max_rejected() {
        let processes = vec![Process::new(1, 0, i64::MAX), Process::new(2, 0, 1)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOutOfRange);

        let at_limit = vec![Process::new(1, MAX_TIME, MAX_TIME)];
        assert!(validate_processes(&at_limit).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let processes = vec![Process::new(1, -1, -4), Process::new(1, 0, 3)];
        let errors = validate_processes(&processes).unwrap_err();
        let kinds: Vec<_> = errors.iter().map(|e| e.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                ValidationErrorKind::NegativeArrival,
                ValidationErrorKind::NegativeBurst,
                ValidationErrorKind::DuplicateId,
            ]
        );
    }
}
