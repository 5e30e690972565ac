//! # greet
//!
//! Validation of person records and greeting formatting.
//!
//! Raw JSON input goes through the [`validate`] engine, which either yields an
//! immutable [`Person`] or a [`ValidationError`] listing every violated rule.
//! A `Person` is then rendered by [`format_greeting`], which cannot fail.
//!
//! ## Quick Start
//!
//! ```rust
//! use greet::{Greeting, Reason, greet, validate};
//! use serde_json::json;
//!
//! let greeting = greet(&json!({"name": "taras", "surname": "belov", "age": 20})).unwrap();
//! assert_eq!(greeting, Greeting { hello: "Taras Belov, 20".to_owned() });
//!
//! let err = validate(&json!({"name": "Taras", "surname": "Belov", "age": 4})).unwrap_err();
//! assert!(err.has("age", Reason::OutOfRange));
//! ```

mod config;
mod cross;
pub mod education;
pub mod error;
mod formatter;
pub mod output;
pub mod person;
mod report;
mod rules;
pub mod samples;
mod validator;

pub use config::{DEFAULT_STAFF_ALIAS, FailureMode, ValidationConfig};
pub use education::EducationLevel;
pub use error::{Reason, ValidationError, Violation, WHOLE_RECORD};
pub use formatter::{GREETING_KEY, Greeting, STAFF_MARKER, format_greeting, title_case};
pub use person::{Person, Surname};
pub use report::CheckReport;
pub use rules::{AGE_MAX_INCLUSIVE, AGE_MIN_EXCLUSIVE, MIN_TEXT_LENGTH};
pub use validator::{validate, validate_with};

use serde_json::Value;

/// Validate `raw` and format the greeting, with the default config.
///
/// # Errors
///
/// Returns [`ValidationError`] when `raw` is not a valid person record.
pub fn greet(raw: &Value) -> Result<Greeting, ValidationError> {
    greet_with(raw, &ValidationConfig::default())
}

/// Validate `raw` under `config` and format the greeting.
///
/// # Errors
///
/// Returns [`ValidationError`] when `raw` is not a valid person record.
pub fn greet_with(raw: &Value, config: &ValidationConfig) -> Result<Greeting, ValidationError> {
    validate_with(raw, config).map(|person| Greeting::for_person(&person))
}
