//! Process input parsing.
//!
//! Input is a list of records separated by `;`, each record four
//! comma-separated integers: `id,arrival,burst,priority`.
//!
//! ```
//! use u_cpusched::parse::parse_processes;
//!
//! let processes = parse_processes("1,0,4,1;2,1,3,2").unwrap();
//! assert_eq!(processes.len(), 2);
//! assert_eq!(processes[1].burst_time, 3);
//! ```
//!
//! Whitespace around tokens is ignored and empty records (for example a
//! trailing `;`) are skipped.

use std::fmt;
use std::str::FromStr;

use crate::models::Process;

const FIELD_NAMES: [&str; 4] = ["id", "arrival", "burst", "priority"];

/// A parse error.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    /// Error category.
    pub kind: ParseErrorKind,
    /// 1-based index of the offending record.
    pub record: usize,
    /// Human-readable description.
    pub message: String,
}

/// Categories of parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A record does not have exactly four fields.
    FieldCount,
    /// A field is blank.
    EmptyField,
    /// A field is not a valid integer.
    InvalidNumber,
}

impl ParseError {
    fn new(kind: ParseErrorKind, record: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            record,
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "record {}: {}", self.record, self.message)
    }
}

impl std::error::Error for ParseError {}

/// Parses `id,arrival,burst,priority;...` into processes, in input order.
pub fn parse_processes(input: &str) -> Result<Vec<Process>, ParseError> {
    input
        .split(';')
        .map(str::trim)
        .filter(|record| !record.is_empty())
        .enumerate()
        .map(|(i, record)| parse_record(i + 1, record))
        .collect()
}

/// Parses a single `id,arrival,burst,priority` record.
pub fn parse_record(record: usize, text: &str) -> Result<Process, ParseError> {
    let fields: Vec<&str> = text.split(',').map(str::trim).collect();
    if fields.len() != FIELD_NAMES.len() {
        return Err(ParseError::new(
            ParseErrorKind::FieldCount,
            record,
            format!(
                "expected 4 fields (id,arrival,burst,priority), found {} in '{text}'",
                fields.len()
            ),
        ));
    }

    let id = parse_field(record, 0, fields[0])?;
    // Times are read as i32 and widened, so policy clocks cannot overflow i64.
    let arrival: i32 = parse_field(record, 1, fields[1])?;
    let burst: i32 = parse_field(record, 2, fields[2])?;
    let priority = parse_field(record, 3, fields[3])?;

    Ok(Process::new(id, i64::from(arrival), i64::from(burst)).with_priority(priority))
}

fn parse_field<T: FromStr>(record: usize, index: usize, token: &str) -> Result<T, ParseError> {
    let name = FIELD_NAMES[index];
    if token.is_empty() {
        return Err(ParseError::new(
            ParseErrorKind::EmptyField,
            record,
            format!("field '{name}' is empty"),
        ));
    }
    token.parse().map_err(|_| {
        ParseError::new(
            ParseErrorKind::InvalidNumber,
            record,
            format!("field '{name}' is not an integer: '{token}'"),
        )
    })
}

impl FromStr for Process {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_record(1, s.trim())
    }
}
