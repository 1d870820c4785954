//! Check outcome and result models
//!
//! A check is a named predicate run by a gate. Its function returns a
//! [`CheckOutcome`]; the gate turns that into an immutable [`CheckResult`].

use serde::Serialize;

use super::Criticality;

/// What a check function reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The check passed, optionally with a note for the report
    Pass(Option<String>),
    /// The check failed, with a reason
    Fail(String),
}

impl CheckOutcome {
    /// Passed with nothing to add
    #[must_use]
    pub const fn pass() -> Self {
        Self::Pass(None)
    }

    /// Passed with a note
    #[must_use]
    pub fn pass_with(detail: impl Into<String>) -> Self {
        Self::Pass(Some(detail.into()))
    }

    /// Failed with a reason
    #[must_use]
    pub fn fail(detail: impl Into<String>) -> Self {
        Self::Fail(detail.into())
    }

    /// Pass when `ok`, otherwise fail with `reason`
    #[must_use]
    pub fn from_bool(ok: bool, reason: impl Into<String>) -> Self {
        if ok { Self::pass() } else { Self::fail(reason) }
    }
}

/// Result of one check within a gate run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    /// Stable identifier (e.g., `env_vars_present`)
    pub name: String,
    /// Human-readable label
    pub label: String,
    /// Whether the check passed
    pub passed: bool,
    /// Whether a failure here fails the gate
    pub criticality: Criticality,
    /// Pass note or failure reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl CheckResult {
    /// Build a result from a check's outcome
    #[must_use]
    pub fn from_outcome(
        name: impl Into<String>,
        label: impl Into<String>,
        criticality: Criticality,
        outcome: CheckOutcome,
    ) -> Self {
        let (passed, detail) = match outcome {
            CheckOutcome::Pass(detail) => (true, detail),
            CheckOutcome::Fail(reason) => (false, Some(reason)),
        };
        Self {
            name: name.into(),
            label: label.into(),
            passed,
            criticality,
            detail,
        }
    }

    /// Whether this result fails its gate
    #[must_use]
    pub const fn is_blocking(&self) -> bool {
        !self.passed && self.criticality.is_critical()
    }

    /// Whether this result is a non-critical failure
    #[must_use]
    pub const fn is_warning(&self) -> bool {
        !self.passed && !self.criticality.is_critical()
    }
}
