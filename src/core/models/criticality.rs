//! Check criticality
//!
//! Decides whether a failing check can fail its gate.

use serde::Serialize;

/// How much a check's failure matters to its gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Criticality {
    /// Failure fails the gate
    #[default]
    Critical,
    /// Failure is reported as a warning only
    Advisory,
}

impl Criticality {
    /// Whether a failure of this check fails the gate
    #[must_use]
    pub const fn is_critical(self) -> bool {
        matches!(self, Self::Critical)
    }
}

impl std::fmt::Display for Criticality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Critical => write!(f, "critical"),
            Self::Advisory => write!(f, "advisory"),
        }
    }
}
