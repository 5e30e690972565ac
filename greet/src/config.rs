//! Configuration types for person validation.

/// Alternate wire key accepted for `is_staff` by default.
pub const DEFAULT_STAFF_ALIAS: &str = "is-staff";

/// How per-field failures are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum FailureMode {
    /// Run every per-field rule and report all failures at once (default).
    #[default]
    CollectAll,
    /// Stop at the first failing rule. Callers then see at most one violation.
    FirstFailure,
}

/// Core validation config.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct ValidationConfig {
    /// Failure reporting mode.
    pub failure_mode: FailureMode,
    /// Extra wire keys mapped onto `is_staff`, tried in order when the
    /// canonical key is absent or `null`.
    pub staff_aliases: Vec<String>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            failure_mode: FailureMode::CollectAll,
            staff_aliases: vec![DEFAULT_STAFF_ALIAS.to_owned()],
        }
    }
}

impl ValidationConfig {
    /// Config that stops at the first failure.
    #[must_use]
    pub fn first_failure() -> Self {
        Self {
            failure_mode: FailureMode::FirstFailure,
            ..Self::default()
        }
    }

    /// Whether validation stops at the first failing rule.
    #[must_use]
    pub fn stops_early(&self) -> bool {
        self.failure_mode == FailureMode::FirstFailure
    }
}
