//! Gate report model

use serde::{Serialize, Serializer};

use super::CheckResult;

/// Overall status of a gate run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GateStatus {
    /// No critical check failed
    Pass,
    /// At least one critical check failed
    Fail,
}

impl GateStatus {
    /// Aggregate check results: FAIL iff any critical check failed
    #[must_use]
    pub fn aggregate(results: &[CheckResult]) -> Self {
        if results.iter().any(CheckResult::is_blocking) {
            Self::Fail
        } else {
            Self::Pass
        }
    }
}

impl std::fmt::Display for GateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pass => write!(f, "PASS"),
            Self::Fail => write!(f, "FAIL"),
        }
    }
}

/// Finalized outcome of one gate run
#[derive(Debug, Clone, Serialize)]
pub struct GateReport {
    /// Gate name (e.g., `preflight`)
    pub gate: String,
    /// When the run finished (RFC 3339)
    pub timestamp: String,
    /// Check results, in execution order
    #[serde(serialize_with = "serialize_checks")]
    pub checks: Vec<CheckResult>,
    /// Aggregated status
    pub overall_status: GateStatus,
}

/// Serialize checks as an ordered map keyed by check name
fn serialize_checks<S: Serializer>(checks: &[CheckResult], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_map(checks.iter().map(|c| (c.name.as_str(), c)))
}

impl GateReport {
    /// Finalize a report from its results
    #[must_use]
    pub fn new(gate: impl Into<String>, checks: Vec<CheckResult>) -> Self {
        let overall_status = GateStatus::aggregate(&checks);
        Self {
            gate: gate.into(),
            timestamp: chrono::Local::now().to_rfc3339(),
            checks,
            overall_status,
        }
    }

    /// Whether the gate passed
    #[must_use]
    pub fn passed(&self) -> bool {
        self.overall_status == GateStatus::Pass
    }

    /// Look up a check result by name
    #[must_use]
    pub fn check(&self, name: &str) -> Option<&CheckResult> {
        self.checks.iter().find(|c| c.name == name)
    }

    /// Critical checks that failed
    pub fn blocking(&self) -> impl Iterator<Item = &CheckResult> {
        self.checks.iter().filter(|c| c.is_blocking())
    }

    /// Non-critical checks that failed
    pub fn warnings(&self) -> impl Iterator<Item = &CheckResult> {
        self.checks.iter().filter(|c| c.is_warning())
    }
}
