//! Per-field rules.
//!
//! Each rule is a pure function from one raw wire value to a typed value or a
//! single violation. Rules never look at other fields; cross-field checks live
//! in [`crate::cross`] and only ever see a complete [`Person`].

use serde_json::{Map, Value};

use crate::config::ValidationConfig;
use crate::education::EducationLevel;
use crate::error::{Reason, Violation};
use crate::person::{AGE, EDUCATION_LEVEL, IS_STAFF, NAME, Person, SURNAME, Surname};

/// Minimum length, in characters, of every text value.
pub const MIN_TEXT_LENGTH: usize = 2;

/// Exclusive lower bound of `age`.
pub const AGE_MIN_EXCLUSIVE: i64 = 4;

/// Inclusive upper bound of `age`.
pub const AGE_MAX_INCLUSIVE: i64 = 99;

/// A successfully typed field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Typed {
    Name(String),
    Surname(Surname),
    Age(i64),
    Staff(bool),
    Education(EducationLevel),
}

/// A rule bound to the wire key it validates.
pub struct FieldRule {
    pub field: &'static str,
    pub required: bool,
    pub check: fn(&Value) -> Result<Typed, Violation>,
}

/// Per-field rules, in reporting order.
pub const FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        field: NAME,
        required: true,
        check: check_name,
    },
    FieldRule {
        field: SURNAME,
        required: true,
        check: check_surname,
    },
    FieldRule {
        field: AGE,
        required: false,
        check: check_age,
    },
    FieldRule {
        field: IS_STAFF,
        required: false,
        check: check_staff,
    },
    FieldRule {
        field: EDUCATION_LEVEL,
        required: false,
        check: check_education,
    },
];

/// Find the raw value for `field`, honouring the configured `is_staff` aliases.
///
/// The canonical key wins over aliases unless it is absent or `null`.
pub fn lookup<'a>(
    object: &'a Map<String, Value>,
    field: &str,
    config: &ValidationConfig,
) -> Option<&'a Value> {
    let canonical = object.get(field).filter(|v| !v.is_null());
    if canonical.is_some() || field != IS_STAFF {
        return object.get(field);
    }
    config
        .staff_aliases
        .iter()
        .find_map(|alias| object.get(alias).filter(|v| !v.is_null()))
        .or_else(|| object.get(field))
}

fn check_text(field: &str, value: &str) -> Result<(), Violation> {
    if value.chars().count() < MIN_TEXT_LENGTH {
        return Err(Violation::new(
            field,
            Reason::TooShort,
            format!("ensure this value has at least {MIN_TEXT_LENGTH} characters"),
        ));
    }
    Ok(())
}

fn check_name(value: &Value) -> Result<Typed, Violation> {
    let Value::String(name) = value else {
        return Err(Violation::new(
            NAME,
            Reason::TypeMismatch,
            "str type expected",
        ));
    };
    check_text(NAME, name)?;
    Ok(Typed::Name(name.clone()))
}

fn check_surname(value: &Value) -> Result<Typed, Violation> {
    match value {
        Value::String(surname) => {
            check_text(SURNAME, surname)?;
            Ok(Typed::Surname(Surname::Single(surname.clone())))
        }
        Value::Array(items) => {
            if items.is_empty() {
                return Err(Violation::new(
                    SURNAME,
                    Reason::TooShort,
                    "ensure this value has at least 1 items",
                ));
            }
            let mut parts = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                let Value::String(part) = item else {
                    return Err(Violation::new(
                        SURNAME,
                        Reason::TypeMismatch,
                        format!("item {index}: str type expected"),
                    ));
                };
                check_text(SURNAME, part).map_err(|v| {
                    Violation::new(SURNAME, v.reason, format!("item {index}: {}", v.message))
                })?;
                parts.push(part.clone());
            }
            Ok(Typed::Surname(Surname::Many(parts)))
        }
        _ => Err(Violation::new(
            SURNAME,
            Reason::TypeMismatch,
            "value is not a valid string or list of strings",
        )),
    }
}

fn check_age(value: &Value) -> Result<Typed, Violation> {
    let Value::Number(number) = value else {
        return Err(not_an_integer());
    };
    if let Some(age) = number.as_i64() {
        if age <= AGE_MIN_EXCLUSIVE {
            return Err(age_too_small());
        }
        if age > AGE_MAX_INCLUSIVE {
            return Err(age_too_large());
        }
        return Ok(Typed::Age(age));
    }
    if number.is_u64() {
        return Err(age_too_large());
    }
    // Integer literals past the u64/i64 range only survive parsing as f64.
    let whole = number
        .as_f64()
        .filter(|float| float.fract() == 0.0 && float.abs() >= BEYOND_I64);
    if let Some(float) = whole {
        return Err(if float.is_sign_negative() {
            age_too_small()
        } else {
            age_too_large()
        });
    }
    Err(not_an_integer())
}

/// 2^63: the smallest magnitude a whole-number `f64` has when neither
/// `as_i64` nor `as_u64` could represent the literal it came from.
const BEYOND_I64: f64 = 9_223_372_036_854_775_808.0;

fn not_an_integer() -> Violation {
    Violation::new(AGE, Reason::TypeMismatch, "value is not a valid integer")
}

fn age_too_small() -> Violation {
    Violation::new(
        AGE,
        Reason::OutOfRange,
        format!("ensure this value is greater than {AGE_MIN_EXCLUSIVE}"),
    )
}

fn age_too_large() -> Violation {
    Violation::new(
        AGE,
        Reason::OutOfRange,
        format!("ensure this value is less than or equal to {AGE_MAX_INCLUSIVE}"),
    )
}

fn check_staff(value: &Value) -> Result<Typed, Violation> {
    match value {
        Value::Bool(flag) => Ok(Typed::Staff(*flag)),
        _ => Err(Violation::new(
            IS_STAFF,
            Reason::TypeMismatch,
            "value could not be parsed to a boolean",
        )),
    }
}

fn check_education(value: &Value) -> Result<Typed, Violation> {
    let Value::String(raw) = value else {
        return Err(Violation::new(
            EDUCATION_LEVEL,
            Reason::TypeMismatch,
            "str type expected",
        ));
    };
    EducationLevel::from_wire(raw)
        .map(Typed::Education)
        .ok_or_else(|| {
            Violation::new(
                EDUCATION_LEVEL,
                Reason::UnknownEnumValue,
                format!(
                    "value is not a valid enumeration member; permitted: {}",
                    EducationLevel::permitted()
                ),
            )
        })
}

/// Typed values collected during the per-field pass.
#[derive(Debug, Default)]
pub struct Draft {
    name: Option<String>,
    surname: Option<Surname>,
    age: Option<i64>,
    is_staff: bool,
    education_level: Option<EducationLevel>,
}

impl Draft {
    pub fn absorb(&mut self, typed: Typed) {
        match typed {
            Typed::Name(name) => self.name = Some(name),
            Typed::Surname(surname) => self.surname = Some(surname),
            Typed::Age(age) => self.age = Some(age),
            Typed::Staff(flag) => self.is_staff = flag,
            Typed::Education(level) => self.education_level = Some(level),
        }
    }

    /// Assemble the record. Fails with `MissingField` for each required slot
    /// left empty.
    ///
    /// # Errors
    ///
    /// Returns the missing-field violations when `name` or `surname` was never absorbed.
    pub fn into_person(self) -> Result<Person, Vec<Violation>> {
        match (self.name, self.surname) {
            (Some(name), Some(surname)) => Ok(Person::new(
                name,
                surname,
                self.age,
                self.is_staff,
                self.education_level,
            )),
            (name, surname) => {
                let mut missing = Vec::new();
                if name.is_none() {
                    missing.push(missing_field(NAME));
                }
                if surname.is_none() {
                    missing.push(missing_field(SURNAME));
                }
                Err(missing)
            }
        }
    }
}

/// `MissingField` violation for `field`.
#[must_use]
pub fn missing_field(field: &str) -> Violation {
    Violation::new(field, Reason::MissingField, "field required")
}
