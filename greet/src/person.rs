//! The validated person record.

use serde::Serialize;

use crate::education::EducationLevel;

/// Wire key of the name field.
pub const NAME: &str = "name";
/// Wire key of the surname field.
pub const SURNAME: &str = "surname";
/// Wire key of the age field.
pub const AGE: &str = "age";
/// Canonical wire key of the staff flag.
pub const IS_STAFF: &str = "is_staff";
/// Wire key of the education level field.
pub const EDUCATION_LEVEL: &str = "education_level";

/// Fields that must be present in every input.
pub const REQUIRED_FIELDS: [&str; 2] = [NAME, SURNAME];

/// One surname or several, in the order given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Surname {
    /// A single surname supplied as a string.
    Single(String),
    /// Several surnames supplied as a non-empty list.
    Many(Vec<String>),
}

impl Surname {
    /// Individual surname parts.
    #[must_use]
    pub fn parts(&self) -> &[String] {
        match self {
            Self::Single(surname) => std::slice::from_ref(surname),
            Self::Many(surnames) => surnames,
        }
    }

    /// Parts joined with a single space.
    #[must_use]
    pub fn phrase(&self) -> String {
        self.parts().join(" ")
    }
}

/// A person record that satisfied every validation rule.
///
/// Only the validator constructs this type, so holding one is proof of validity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    name: String,
    surname: Surname,
    #[serde(skip_serializing_if = "Option::is_none")]
    age: Option<i64>,
    is_staff: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    education_level: Option<EducationLevel>,
}

impl Person {
    pub(crate) fn new(
        name: String,
        surname: Surname,
        age: Option<i64>,
        is_staff: bool,
        education_level: Option<EducationLevel>,
    ) -> Self {
        Self {
            name,
            surname,
            age,
            is_staff,
            education_level,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn surname(&self) -> &Surname {
        &self.surname
    }

    #[must_use]
    pub fn age(&self) -> Option<i64> {
        self.age
    }

    #[must_use]
    pub fn is_staff(&self) -> bool {
        self.is_staff
    }

    #[must_use]
    pub fn education_level(&self) -> Option<EducationLevel> {
        self.education_level
    }

    /// Name followed by every surname part, without separators.
    #[must_use]
    pub fn combined_text(&self) -> String {
        let mut text = self.name.clone();
        for part in self.surname.parts() {
            text.push_str(part);
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_and_many_share_phrase() {
        let single = Surname::Single("Belov".to_owned());
        let many = Surname::Many(vec!["Belov".to_owned()]);
        assert_eq!(single.phrase(), many.phrase());
        assert_eq!(single.parts(), many.parts());
    }

    #[test]
    fn test_many_phrase_keeps_order() {
        let many = Surname::Many(vec!["Santos".to_owned(), "Tavares".to_owned()]);
        assert_eq!(many.phrase(), "Santos Tavares");
    }

    #[test]
    fn test_combined_text() {
        let person = Person::new(
            "Eduardo".to_owned(),
            Surname::Many(vec!["Santos".to_owned(), "Tavares".to_owned()]),
            None,
            false,
            None,
        );
        assert_eq!(person.combined_text(), "EduardoSantosTavares");
    }
}
