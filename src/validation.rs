//! Structural input checks.
//!
//! The engines never validate: duplicate ids and dangling references are
//! the collaborator's responsibility to rule out before a run. This module
//! is the tool for that — call it once on the assembled inputs, before
//! handing them to either engine. Detects:
//! - Duplicate process pids
//! - Duplicate resource names
//! - Actions referencing unknown processes or resources
//!
//! Numeric ranges (negative times and the like) are deliberately not
//! checked here; inputs are assumed already parsed into valid shapes.

use std::collections::HashSet;
use std::fmt;

use crate::models::{Action, Process, Resource};

/// Validation result: `Ok(())` or every detected issue.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation findings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share an identifier.
    DuplicateId,
    /// An action references a process that does not exist.
    UnknownProcess,
    /// An action references a resource that does not exist.
    UnknownResource,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Validates the assembled inputs of a simulation run.
///
/// Accumulates every issue rather than stopping at the first. An empty
/// input set is valid.
pub fn validate_input(
    processes: &[Process],
    resources: &[Resource],
    actions: &[Action],
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut pids = HashSet::new();
    for p in processes {
        if !pids.insert(p.pid.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate process pid: {}", p.pid),
            ));
        }
    }

    let mut names = HashSet::new();
    for r in resources {
        if !names.insert(r.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate resource name: {}", r.name),
            ));
        }
    }

    for a in actions {
        if !pids.contains(a.pid.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownProcess,
                format!("action at cycle {} references unknown pid '{}'", a.cycle, a.pid),
            ));
        }
        if !names.contains(a.resource.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownResource,
                format!(
                    "action at cycle {} references unknown resource '{}'",
                    a.cycle, a.resource
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
