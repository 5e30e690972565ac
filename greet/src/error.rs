//! Error types for person validation.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Field name used for violations that concern the whole record.
pub const WHOLE_RECORD: &str = "*";

/// Machine-matchable reason a rule rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[non_exhaustive]
pub enum Reason {
    /// A required field is absent.
    MissingField,
    /// The value has the wrong JSON shape for the field.
    TypeMismatch,
    /// A text value is below the minimum length.
    TooShort,
    /// The name consists only of numeric characters.
    NumericName,
    /// A numeric bound was violated.
    OutOfRange,
    /// Name and surname mix Cyrillic and Latin letters.
    MixedScript,
    /// The value is not one of the enumerated tokens.
    UnknownEnumValue,
}

impl Reason {
    /// Stable string form of the reason code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "MissingField",
            Self::TypeMismatch => "TypeMismatch",
            Self::TooShort => "TooShort",
            Self::NumericName => "NumericName",
            Self::OutOfRange => "OutOfRange",
            Self::MixedScript => "MixedScript",
            Self::UnknownEnumValue => "UnknownEnumValue",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single violated constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct Violation {
    /// Offending field, or [`WHOLE_RECORD`] for cross-field rules.
    pub field: String,
    /// Reason code.
    pub reason: Reason,
    /// Human-readable description.
    pub message: String,
}

impl Violation {
    /// Create a violation for `field`.
    #[must_use]
    pub fn new(field: &str, reason: Reason, message: impl Into<String>) -> Self {
        Self {
            field: field.to_owned(),
            reason,
            message: message.into(),
        }
    }

    /// Format the violation for human-readable output: `{field}: {message} [{reason}]`.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        format!("{}: {} [{}]", self.field, self.message, self.reason)
    }
}

/// Rejection of a person record. Always carries at least one violation.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{} validation error(s) for Person", .violations.len())]
pub struct ValidationError {
    violations: Vec<Violation>,
}

impl ValidationError {
    /// Wrap a non-empty violation list.
    pub(crate) fn new(violations: Vec<Violation>) -> Self {
        debug_assert!(!violations.is_empty(), "rejection without violations");
        Self { violations }
    }

    /// Every violated constraint, in the order the rules ran.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consume the error, yielding its violations.
    #[must_use]
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    /// Whether a violation with this field and reason is present.
    #[must_use]
    pub fn has(&self, field: &str, reason: Reason) -> bool {
        self.violations
            .iter()
            .any(|v| v.field == field && v.reason == reason)
    }

    /// Reason codes reported for `field`.
    pub fn reasons_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = Reason> + 'a {
        self.violations
            .iter()
            .filter(move |v| v.field == field)
            .map(|v| v.reason)
    }

    /// `(field, reason)` pairs for the boundary.
    #[must_use]
    pub fn pairs(&self) -> Vec<(&str, Reason)> {
        self.violations
            .iter()
            .map(|v| (v.field.as_str(), v.reason))
            .collect()
    }
}
