//! Sample request payloads used in documentation and smoke tests.

use serde::Serialize;
use serde_json::{Value, json};

use crate::education::EducationLevel;

/// "One surname".
const SINGLE_SUMMARY: &str = "\u{041e}\u{0434}\u{043d}\u{0430} \
                              \u{0444}\u{0430}\u{043c}\u{0438}\u{043b}\u{0438}\u{044f}";

/// "A single surname is passed as a string".
const SINGLE_DESCRIPTION: &str = "\u{041e}\u{0434}\u{0438}\u{043d}\u{043e}\u{0447}\u{043d}\u{0430}\u{044f} \
                                  \u{0444}\u{0430}\u{043c}\u{0438}\u{043b}\u{0438}\u{044f} \
                                  \u{043f}\u{0435}\u{0440}\u{0435}\u{0434}\u{0430}\u{0435}\u{0442}\u{0441}\u{044f} \
                                  \u{0441}\u{0442}\u{0440}\u{043e}\u{043a}\u{043e}\u{0439}";

/// "Several surnames".
const MULTIPLE_SUMMARY: &str = "\u{041d}\u{0435}\u{0441}\u{043a}\u{043e}\u{043b}\u{044c}\u{043a}\u{043e} \
                                \u{0444}\u{0430}\u{043c}\u{0438}\u{043b}\u{0438}\u{0439}";

/// "Several surnames are passed as a list".
const MULTIPLE_DESCRIPTION: &str = "\u{041d}\u{0435}\u{0441}\u{043a}\u{043e}\u{043b}\u{044c}\u{043a}\u{043e} \
                                    \u{0444}\u{0430}\u{043c}\u{0438}\u{043b}\u{0438}\u{0439} \
                                    \u{043f}\u{0435}\u{0440}\u{0435}\u{0434}\u{0430}\u{044e}\u{0442}\u{0441}\u{044f} \
                                    \u{0441}\u{043f}\u{0438}\u{0441}\u{043a}\u{043e}\u{043c}";

/// "Invalid request".
const INVALID_SUMMARY: &str = "\u{041d}\u{0435}\u{043a}\u{043e}\u{0440}\u{0440}\u{0435}\u{043a}\u{0442}\u{043d}\u{044b}\u{0439} \
                               \u{0437}\u{0430}\u{043f}\u{0440}\u{043e}\u{0441}";

/// "Age is passed only as an integer".
const INVALID_DESCRIPTION: &str = "\u{0412}\u{043e}\u{0437}\u{0440}\u{0430}\u{0441}\u{0442} \
                                   \u{043f}\u{0435}\u{0440}\u{0435}\u{0434}\u{0430}\u{0435}\u{0442}\u{0441}\u{044f} \
                                   \u{0442}\u{043e}\u{043b}\u{044c}\u{043a}\u{043e} \
                                   \u{0446}\u{0435}\u{043b}\u{044b}\u{043c} \
                                   \u{0447}\u{0438}\u{0441}\u{043b}\u{043e}\u{043c}";

/// A named example payload.
#[derive(Debug, Clone, Serialize)]
pub struct Sample {
    pub key: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
    pub value: Value,
}

/// All documentation samples: two valid payloads and one rejected one.
#[must_use]
pub fn samples() -> Vec<Sample> {
    vec![
        Sample {
            key: "single_surname",
            summary: SINGLE_SUMMARY,
            description: SINGLE_DESCRIPTION,
            value: json!({
                "name": "Taras",
                "surname": "Belov",
                "age": 20,
                "is_staff": false,
                "education_level": EducationLevel::Secondary.label(),
            }),
        },
        Sample {
            key: "multiple_surnames",
            summary: MULTIPLE_SUMMARY,
            description: MULTIPLE_DESCRIPTION,
            value: json!({
                "name": "Eduardo",
                "surname": ["Santos", "Tavares"],
                "age": 20,
                "is_staff": false,
                "education_level": EducationLevel::Higher.label(),
            }),
        },
        Sample {
            key: "invalid",
            summary: INVALID_SUMMARY,
            description: INVALID_DESCRIPTION,
            value: json!({
                "name": "Eduardo",
                "surname": ["Santos", "Tavares"],
                "age": "forever young",
                "is_staff": false,
                "education_level": EducationLevel::Special.label(),
            }),
        },
    ]
}

/// Look up a sample by key.
#[must_use]
pub fn sample(key: &str) -> Option<Sample> {
    samples().into_iter().find(|s| s.key == key)
}
