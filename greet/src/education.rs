//! Education levels and their two accepted wire forms.
//!
//! Every level can be supplied either by its symbolic token (`HIGHER`) or by
//! its exact display label. Both forms resolve through a single read-only
//! lookup table built on first use.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use serde::{Serialize, Serializer};

/// Display label of [`EducationLevel::Secondary`].
pub const SECONDARY_LABEL: &str = "\u{0421}\u{0440}\u{0435}\u{0434}\u{043d}\u{0435}\u{0435} \
                                   \u{043e}\u{0431}\u{0440}\u{0430}\u{0437}\u{043e}\u{0432}\u{0430}\u{043d}\u{0438}\u{0435}";

/// Display label of [`EducationLevel::Special`].
pub const SPECIAL_LABEL: &str = "\u{0421}\u{0440}\u{0435}\u{0434}\u{043d}\u{0435}\u{0435} \
                                 \u{0441}\u{043f}\u{0435}\u{0446}\u{0438}\u{0430}\u{043b}\u{044c}\u{043d}\u{043e}\u{0435} \
                                 \u{043e}\u{0431}\u{0440}\u{0430}\u{0437}\u{043e}\u{0432}\u{0430}\u{043d}\u{0438}\u{0435}";

/// Display label of [`EducationLevel::Higher`].
pub const HIGHER_LABEL: &str = "\u{0412}\u{044b}\u{0441}\u{0448}\u{0435}\u{0435} \
                                \u{043e}\u{0431}\u{0440}\u{0430}\u{0437}\u{043e}\u{0432}\u{0430}\u{043d}\u{0438}\u{0435}";

/// Highest completed level of education.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EducationLevel {
    /// Secondary school.
    Secondary,
    /// Secondary vocational school.
    Special,
    /// University degree.
    Higher,
}

/// Token and label -> level. Built once, read concurrently.
static WIRE_FORMS: LazyLock<HashMap<&'static str, EducationLevel>> = LazyLock::new(|| {
    let mut table = HashMap::with_capacity(EducationLevel::ALL.len() * 2);
    for level in EducationLevel::ALL {
        table.insert(level.token(), level);
        table.insert(level.label(), level);
    }
    table
});

impl EducationLevel {
    /// All levels in declaration order.
    pub const ALL: [Self; 3] = [Self::Secondary, Self::Special, Self::Higher];

    /// Symbolic token used on the wire (`SECONDARY`, `SPECIAL`, `HIGHER`).
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Secondary => "SECONDARY",
            Self::Special => "SPECIAL",
            Self::Higher => "HIGHER",
        }
    }

    /// Exact display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Secondary => SECONDARY_LABEL,
            Self::Special => SPECIAL_LABEL,
            Self::Higher => HIGHER_LABEL,
        }
    }

    /// Resolve a wire value given either as the symbolic token or as the
    /// exact display label. Matching is case-sensitive.
    #[must_use]
    pub fn from_wire(value: &str) -> Option<Self> {
        WIRE_FORMS.get(value).copied()
    }

    /// Comma-separated list of accepted tokens, for error messages.
    #[must_use]
    pub fn permitted() -> String {
        Self::ALL
            .iter()
            .map(|level| format!("'{}'", level.token()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for EducationLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
