//! Crate-level error type.

use std::fmt;

use crate::parse::ParseError;
use crate::validation::ValidationError;

/// Errors surfaced by the simulator and its collaborators.
#[derive(Debug)]
pub enum SimError {
    /// Process input could not be parsed.
    Parse(ParseError),
    /// Algorithm name is not one of `FCFS`, `RR`, `SJF`, `Priority`.
    UnknownAlgorithm(String),
    /// Process input failed validation.
    Validation(Vec<ValidationError>),
    /// Round Robin quantum must be positive.
    InvalidQuantum(i64),
    /// JSON (de)serialization failed.
    Serialization(serde_json::Error),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::Parse(e) => write!(f, "invalid process input: {e}"),
            SimError::UnknownAlgorithm(name) => write!(
                f,
                "unknown algorithm '{name}' (expected FCFS, RR, SJF or Priority)"
            ),
            SimError::Validation(errors) => {
                write!(f, "process input failed validation")?;
                for e in errors {
                    write!(f, "; {}", e.message)?;
                }
                Ok(())
            }
            SimError::InvalidQuantum(q) => {
                write!(f, "time quantum must be positive, got {q}")
            }
            SimError::Serialization(e) => write!(f, "serialization failed: {e}"),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::Parse(e) => Some(e),
            SimError::Serialization(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseError> for SimError {
    fn from(e: ParseError) -> Self {
        SimError::Parse(e)
    }
}

impl From<Vec<ValidationError>> for SimError {
    fn from(errors: Vec<ValidationError>) -> Self {
        SimError::Validation(errors)
    }
}

impl From<serde_json::Error> for SimError {
    fn from(e: serde_json::Error) -> Self {
        SimError::Serialization(e)
    }
}
