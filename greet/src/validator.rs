//! Two-pass person validation.
//!
//! 1. Required keys are checked for presence.
//! 2. Every per-field rule runs against its raw value; failures are collected.
//! 3. Only when both passes are clean is the typed record handed to the
//!    cross-field rules.

use serde_json::Value;

use crate::config::ValidationConfig;
use crate::cross;
use crate::error::{Reason, ValidationError, Violation, WHOLE_RECORD};
use crate::person::{Person, REQUIRED_FIELDS};
use crate::rules::{Draft, FIELD_RULES, lookup, missing_field};

/// Validate a raw wire value with the default [`ValidationConfig`].
///
/// # Errors
///
/// Returns [`ValidationError`] listing every violated constraint.
pub fn validate(raw: &Value) -> Result<Person, ValidationError> {
    validate_with(raw, &ValidationConfig::default())
}

/// Validate a raw wire value into a [`Person`].
///
/// # Errors
///
/// Returns [`ValidationError`] listing every violated constraint, or only the
/// first one when `config` asks for [`FailureMode::FirstFailure`](crate::FailureMode::FirstFailure).
pub fn validate_with(raw: &Value, config: &ValidationConfig) -> Result<Person, ValidationError> {
    let person = check_fields(raw, config).map_err(reject)?;

    let violations = cross::check_record(&person, config);
    if !violations.is_empty() {
        return Err(reject(violations));
    }

    tracing::debug!(name = person.name(), "person record accepted");
    Ok(person)
}

/// Presence and per-field passes. Yields a fully typed record or the
/// collected violations.
fn check_fields(raw: &Value, config: &ValidationConfig) -> Result<Person, Vec<Violation>> {
    let Value::Object(object) = raw else {
        return Err(vec![Violation::new(
            WHOLE_RECORD,
            Reason::TypeMismatch,
            "value is not a valid object",
        )]);
    };

    let mut violations = Vec::new();

    for field in REQUIRED_FIELDS {
        if !object.contains_key(field) {
            violations.push(missing_field(field));
            if config.stops_early() {
                return Err(violations);
            }
        }
    }

    let mut draft = Draft::default();
    for rule in FIELD_RULES {
        let Some(value) = lookup(object, rule.field, config) else {
            continue;
        };
        if value.is_null() && !rule.required {
            continue;
        }
        match (rule.check)(value) {
            Ok(typed) => draft.absorb(typed),
            Err(violation) => {
                violations.push(violation);
                if config.stops_early() {
                    break;
                }
            }
        }
    }

    if !violations.is_empty() {
        return Err(violations);
    }
    draft.into_person()
}

fn reject(violations: Vec<Violation>) -> ValidationError {
    tracing::debug!(count = violations.len(), "person record rejected");
    ValidationError::new(violations)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::non_ascii_literal)]
mod tests {
    use super::*;
    use crate::config::FailureMode;
    use crate::education::EducationLevel;
    use crate::person::{AGE, EDUCATION_LEVEL, IS_STAFF, NAME, SURNAME, Surname};
    use serde_json::json;

    #[test]
    fn test_minimal_record() {
        let person = validate(&json!({"name": "Taras", "surname": "Belov"})).unwrap();
        assert_eq!(person.name(), "Taras");
        assert_eq!(person.surname(), &Surname::Single("Belov".to_owned()));
        assert_eq!(person.age(), None);
        assert!(!person.is_staff());
        assert_eq!(person.education_level(), None);
    }

    #[test]
    fn test_full_record() {
        let person = validate(&json!({
            "name": "Eduardo",
            "surname": ["Santos", "Tavares"],
            "age": 20,
            "is_staff": true,
            "education_level": "HIGHER",
            "unknown": "ignored"
        }))
        .unwrap();
        assert_eq!(person.age(), Some(20));
        assert!(person.is_staff());
        assert_eq!(person.education_level(), Some(EducationLevel::Higher));
    }

    #[test]
    fn test_non_object_input() {
        let err = validate(&json!(["Taras", "Belov"])).unwrap_err();
        assert_eq!(err.pairs(), vec![(WHOLE_RECORD, Reason::TypeMismatch)]);
    }

    #[test]
    fn test_missing_fields_reported_first() {
        let err = validate(&json!({"age": 2})).unwrap_err();
        assert_eq!(
            err.pairs(),
            vec![
                (NAME, Reason::MissingField),
                (SURNAME, Reason::MissingField),
                (AGE, Reason::OutOfRange),
            ]
        );
    }

    #[test]
    fn test_null_required_field_is_type_mismatch() {
        let err = validate(&json!({"name": null, "surname": "Belov"})).unwrap_err();
        assert_eq!(err.pairs(), vec![(NAME, Reason::TypeMismatch)]);
    }

    #[test]
    fn test_null_optional_fields_are_absent() {
        let person = validate(&json!({
            "name": "Taras",
            "surname": "Belov",
            "age": null,
            "is_staff": null,
            "education_level": null
        }))
        .unwrap();
        assert_eq!(person.age(), None);
        assert!(!person.is_staff());
        assert_eq!(person.education_level(), None);
    }

    #[test]
    fn test_all_field_failures_collected() {
        let err = validate(&json!({
            "name": "T",
            "surname": 5,
            "age": "forever young",
            "is_staff": "no",
            "education_level": "PHD"
        }))
        .unwrap_err();
        assert_eq!(
            err.pairs(),
            vec![
                (NAME, Reason::TooShort),
                (SURNAME, Reason::TypeMismatch),
                (AGE, Reason::TypeMismatch),
                (IS_STAFF, Reason::TypeMismatch),
                (EDUCATION_LEVEL, Reason::UnknownEnumValue),
            ]
        );
    }

    #[test]
    fn test_first_failure_mode_stops_early() {
        let config = ValidationConfig::first_failure();
        assert_eq!(config.failure_mode, FailureMode::FirstFailure);
        let err = validate_with(
            &json!({"name": "T", "surname": 5, "age": "forever young"}),
            &config,
        )
        .unwrap_err();
        assert_eq!(err.pairs(), vec![(NAME, Reason::TooShort)]);

        let err = validate_with(&json!({}), &config).unwrap_err();
        assert_eq!(err.pairs(), vec![(NAME, Reason::MissingField)]);
    }

    #[test]
    fn test_cross_rules_skipped_when_fields_fail() {
        // Numeric, mixed-script name with an invalid age: only the age is reported.
        let err = validate(&json!({"name": "12", "surname": "Белов", "age": 3})).unwrap_err();
        assert_eq!(err.pairs(), vec![(AGE, Reason::OutOfRange)]);
    }

    #[test]
    fn test_cross_rules_collected_together() {
        let err = validate(&json!({"name": "42", "surname": ["Belov", "Белов"]})).unwrap_err();
        assert_eq!(
            err.pairs(),
            vec![
                (NAME, Reason::NumericName),
                (WHOLE_RECORD, Reason::MixedScript)
            ]
        );
    }

    #[test]
    fn test_staff_alias() {
        let person =
            validate(&json!({"name": "Taras", "surname": "Belov", "is-staff": true})).unwrap();
        assert!(person.is_staff());

        let mut config = ValidationConfig::default();
        config.staff_aliases = vec!["staff".to_owned()];
        let person = validate_with(
            &json!({"name": "Taras", "surname": "Belov", "is-staff": true, "staff": true}),
            &config,
        )
        .unwrap();
        assert!(person.is_staff());

        config.staff_aliases.clear();
        let person = validate_with(
            &json!({"name": "Taras", "surname": "Belov", "is-staff": true}),
            &config,
        )
        .unwrap();
        assert!(!person.is_staff());
    }

    #[test]
    fn test_alias_type_mismatch_reported_on_canonical_field() {
        let err =
            validate(&json!({"name": "Taras", "surname": "Belov", "is-staff": 1})).unwrap_err();
        assert_eq!(err.pairs(), vec![(IS_STAFF, Reason::TypeMismatch)]);
    }
}
