//! Validation report types.

use serde::Serialize;

use crate::error::{ValidationError, Violation};
use crate::formatter::format_greeting;
use crate::person::Person;

/// Outcome of checking one input document.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct CheckReport {
    /// Whether the input was accepted.
    pub ok: bool,
    /// The accepted record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person: Option<Person>,
    /// Greeting for the accepted record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greeting: Option<String>,
    /// Every violated constraint; empty when `ok`.
    pub violations: Vec<Violation>,
}

impl CheckReport {
    /// Build a report from a validation outcome.
    #[must_use]
    pub fn from_outcome(outcome: Result<Person, ValidationError>) -> Self {
        match outcome {
            Ok(person) => Self {
                ok: true,
                greeting: Some(format_greeting(&person)),
                person: Some(person),
                violations: Vec::new(),
            },
            Err(err) => Self {
                ok: false,
                person: None,
                greeting: None,
                violations: err.into_violations(),
            },
        }
    }

    /// Number of violations found.
    #[must_use]
    pub fn errors_count(&self) -> usize {
        self.violations.len()
    }
}
