//! Greeting formatting for validated records.

use serde::{Deserialize, Serialize};

use crate::person::Person;

/// Marker appended for staff members.
pub const STAFF_MARKER: &str = "\u{0441}\u{043e}\u{0442}\u{0440}\u{0443}\u{0434}\u{043d}\u{0438}\u{043a}";

/// Key of the one-entry response object.
pub const GREETING_KEY: &str = "Hello";

const SEPARATOR: &str = ", ";

/// Boundary response: `{"Hello": "<greeting>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    #[serde(rename = "Hello")]
    pub hello: String,
}

impl Greeting {
    #[must_use]
    pub fn for_person(person: &Person) -> Self {
        Self {
            hello: format_greeting(person),
        }
    }
}

/// Uppercase the first letter of every whitespace-separated token and
/// lowercase the rest. Whitespace is kept as is.
///
/// Only the leading char of a multi-char uppercase mapping stays upper
/// (`ß` becomes `Ss`), so the result is a fixed point.
#[must_use]
pub fn title_case(phrase: &str) -> String {
    let mut out = String::with_capacity(phrase.len());
    let mut token_start = true;
    for ch in phrase.chars() {
        if ch.is_whitespace() {
            out.push(ch);
            token_start = true;
        } else if token_start {
            let mut upper = ch.to_uppercase();
            out.extend(upper.next());
            out.extend(upper.flat_map(char::to_lowercase));
            token_start = false;
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}

/// Render `person` as a greeting line, e.g. `Eduardo Santos Tavares, 20, <education>`.
#[must_use]
pub fn format_greeting(person: &Person) -> String {
    let phrase = format!("{} {}", person.name(), person.surname().phrase());
    let mut greeting = title_case(&phrase);

    if let Some(age) = person.age() {
        greeting.push_str(SEPARATOR);
        greeting.push_str(&age.to_string());
    }
    if let Some(level) = person.education_level() {
        greeting.push_str(SEPARATOR);
        greeting.push_str(&level.label().to_lowercase());
    }
    if person.is_staff() {
        greeting.push_str(SEPARATOR);
        greeting.push_str(STAFF_MARKER);
    }
    greeting
}
