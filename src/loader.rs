//! Text-descriptor loading.
//!
//! Parses the three comma-separated row shapes the presentation layer
//! feeds the engines:
//!
//! ```text
//! # processes          # resources       # actions
//! pid,burst,arrival,priority
//!                      name,capacity     pid,type,resource,cycle
//! ```
//!
//! Blank lines and lines starting with `#` are skipped, fields are
//! trimmed, and the action type is case-insensitive. Rows with too few
//! fields or non-numeric values are reported as `LoadError`s carrying the
//! 1-based line number; extra trailing fields are ignored.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::models::{AccessKind, Action, Process, Resource};

/// Error raised while loading a descriptor file.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Io(io::Error),
    /// A row has fewer fields than its shape requires.
    MissingFields {
        /// 1-based line number.
        line: usize,
        /// Fields the row shape requires.
        expected: usize,
        /// Fields actually present.
        found: usize,
    },
    /// A field failed to parse.
    InvalidField {
        /// 1-based line number.
        line: usize,
        /// Name of the offending field.
        field: &'static str,
        /// The raw value.
        value: String,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "cannot read descriptor file: {e}"),
            LoadError::MissingFields {
                line,
                expected,
                found,
            } => write!(
                f,
                "line {line}: expected at least {expected} fields, found {found}"
            ),
            LoadError::InvalidField { line, field, value } => {
                write!(f, "line {line}: invalid {field} '{value}'")
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        LoadError::Io(e)
    }
}

/// Parses process rows: `pid,burst,arrival,priority`.
///
/// # Example
///
/// ```
/// let input = "# pid,burst,arrival,priority\nP1,8,0,2\nP2,4,1,1\n";
/// let processes = cyclesim::loader::parse_processes(input).unwrap();
/// assert_eq!(processes.len(), 2);
/// assert_eq!(processes[1].burst_time, 4);
/// ```
pub fn parse_processes(input: &str) -> Result<Vec<Process>, LoadError> {
    let mut processes = Vec::new();
    for (line, row) in rows(input) {
        let fields = split_fields(row, line, 4)?;
        let burst = parse_number(fields[1], line, "burst time")?;
        let arrival = parse_number(fields[2], line, "arrival time")?;
        let priority = parse_number(fields[3], line, "priority")?;
        processes.push(Process::new(fields[0], burst, arrival).with_priority(priority));
    }
    Ok(processes)
}

/// Parses resource rows: `name,capacity`.
pub fn parse_resources(input: &str) -> Result<Vec<Resource>, LoadError> {
    let mut resources = Vec::new();
    for (line, row) in rows(input) {
        let fields = split_fields(row, line, 2)?;
        let capacity = parse_number(fields[1], line, "capacity")?;
        resources.push(Resource::new(fields[0], capacity));
    }
    Ok(resources)
}

/// Parses action rows: `pid,type,resource,cycle`.
pub fn parse_actions(input: &str) -> Result<Vec<Action>, LoadError> {
    let mut actions = Vec::new();
    for (line, row) in rows(input) {
        let fields = split_fields(row, line, 4)?;
        let kind = match fields[1].to_ascii_uppercase().as_str() {
            "READ" => AccessKind::Read,
            "WRITE" => AccessKind::Write,
            other => {
                return Err(LoadError::InvalidField {
                    line,
                    field: "action type",
                    value: other.to_string(),
                })
            }
        };
        let cycle = parse_number(fields[3], line, "cycle")?;
        actions.push(Action::new(fields[0], kind, fields[2], cycle));
    }
    Ok(actions)
}

/// Reads and parses a process descriptor file.
pub fn load_processes(path: impl AsRef<Path>) -> Result<Vec<Process>, LoadError> {
    parse_processes(&fs::read_to_string(path)?)
}

/// Reads and parses a resource descriptor file.
pub fn load_resources(path: impl AsRef<Path>) -> Result<Vec<Resource>, LoadError> {
    parse_resources(&fs::read_to_string(path)?)
}

/// Reads and parses an action descriptor file.
pub fn load_actions(path: impl AsRef<Path>) -> Result<Vec<Action>, LoadError> {
    parse_actions(&fs::read_to_string(path)?)
}

/// Data rows with their 1-based line numbers; blanks and `#` comments skipped.
fn rows(input: &str) -> impl Iterator<Item = (usize, &str)> {
    input
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'))
}

fn split_fields(row: &str, line: usize, expected: usize) -> Result<Vec<&str>, LoadError> {
    let fields: Vec<&str> = row.split(',').map(str::trim).collect();
    if fields.len() < expected {
        return Err(LoadError::MissingFields {
            line,
            expected,
            found: fields.len(),
        });
    }
    Ok(fields)
}

fn parse_number<T: std::str::FromStr>(
    value: &str,
    line: usize,
    field: &'static str,
) -> Result<T, LoadError> {
    value.parse().map_err(|_| LoadError::InvalidField {
        line,
        field,
        value: value.to_string(),
    })
}
