//! Cross-field rules.
//!
//! These run as a second pass over a fully typed [`Person`]; a record that
//! failed any per-field rule never reaches them.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::ValidationConfig;
use crate::error::{Reason, Violation, WHOLE_RECORD};
use crate::person::{NAME, Person};

static CYRILLIC_LETTER: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"[\p{Script=Cyrillic}&&\p{Alphabetic}]") {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid Cyrillic regex: {err}"),
    }
});

static LATIN_LETTER: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"[\p{Script=Latin}&&\p{Alphabetic}]") {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid Latin regex: {err}"),
    }
});

type CrossRule = fn(&Person) -> Option<Violation>;

const CROSS_RULES: &[CrossRule] = &[name_not_numeric, single_script];

/// Run every cross-field rule against `person`.
pub fn check_record(person: &Person, config: &ValidationConfig) -> Vec<Violation> {
    let mut violations = Vec::new();
    for rule in CROSS_RULES {
        if let Some(violation) = rule(person) {
            violations.push(violation);
            if config.stops_early() {
                break;
            }
        }
    }
    violations
}

/// Whether `text` is non-empty and made only of numeric characters.
#[must_use]
pub fn is_numeric(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_numeric)
}

/// Whether `text` contains both a Cyrillic and a Latin letter.
#[must_use]
pub fn mixes_scripts(text: &str) -> bool {
    CYRILLIC_LETTER.is_match(text) && LATIN_LETTER.is_match(text)
}

fn name_not_numeric(person: &Person) -> Option<Violation> {
    is_numeric(person.name()).then(|| {
        Violation::new(NAME, Reason::NumericName, "name must not be numeric")
    })
}

fn single_script(person: &Person) -> Option<Violation> {
    mixes_scripts(&person.combined_text()).then(|| {
        Violation::new(
            WHOLE_RECORD,
            Reason::MixedScript,
            "name and surname must use only Latin or only Cyrillic letters",
        )
    })
}
