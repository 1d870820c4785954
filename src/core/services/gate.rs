//! Gate evaluation
//!
//! A gate runs an ordered list of named checks, one after another, and
//! aggregates their results. A check that fails or errors never stops the
//! checks after it. The gate fails iff a critical check failed.

use crate::core::models::{CheckOutcome, CheckResult, Criticality, GateReport};

/// Function run by a check
pub type CheckFn<'a> = Box<dyn FnOnce() -> anyhow::Result<CheckOutcome> + 'a>;

/// A named check waiting to run
pub struct GateCheck<'a> {
    /// Stable identifier used in reports
    pub name: &'static str,
    /// Human-readable label
    pub label: &'static str,
    /// Whether a failure fails the gate
    pub criticality: Criticality,
    run: CheckFn<'a>,
}

impl<'a> GateCheck<'a> {
    /// A check whose failure fails the gate
    pub fn critical<F>(name: &'static str, label: &'static str, run: F) -> Self
    where
        F: FnOnce() -> anyhow::Result<CheckOutcome> + 'a,
    {
        Self::new(name, label, Criticality::Critical, run)
    }

    /// A check whose failure is only a warning
    pub fn advisory<F>(name: &'static str, label: &'static str, run: F) -> Self
    where
        F: FnOnce() -> anyhow::Result<CheckOutcome> + 'a,
    {
        Self::new(name, label, Criticality::Advisory, run)
    }

    /// A check with explicit criticality
    pub fn new<F>(name: &'static str, label: &'static str, criticality: Criticality, run: F) -> Self
    where
        F: FnOnce() -> anyhow::Result<CheckOutcome> + 'a,
    {
        Self {
            name,
            label,
            criticality,
            run: Box::new(run),
        }
    }

    /// Run the check, folding an error into a failed result
    fn execute(self) -> CheckResult {
        let outcome = match (self.run)() {
            Ok(outcome) => outcome,
            Err(e) => {
                log::debug!("Check {} errored: {e:#}", self.name);
                CheckOutcome::Fail(format!("{e:#}"))
            },
        };
        CheckResult::from_outcome(self.name, self.label, self.criticality, outcome)
    }
}

impl std::fmt::Debug for GateCheck<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GateCheck")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("criticality", &self.criticality)
            .finish_non_exhaustive()
    }
}

/// Receives progress while a gate runs
pub trait GateObserver {
    /// Called after each check completes
    fn check_finished(&mut self, result: &CheckResult);

    /// Called once with the finalized report
    fn gate_finished(&mut self, report: &GateReport);
}

/// Observer that discards all progress
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl GateObserver for SilentObserver {
    fn check_finished(&mut self, _result: &CheckResult) {}

    fn gate_finished(&mut self, _report: &GateReport) {}
}

/// Runs the checks of one gate
#[derive(Debug, Clone)]
pub struct GateEvaluator {
    gate: String,
}

impl GateEvaluator {
    /// Evaluator for the named gate
    #[must_use]
    pub fn new(gate: impl Into<String>) -> Self {
        Self { gate: gate.into() }
    }

    /// Run `checks` sequentially, in order, and finalize the report
    pub fn evaluate(&self, checks: Vec<GateCheck<'_>>, observer: &mut dyn GateObserver) -> GateReport {
        let mut results = Vec::with_capacity(checks.len());

        for check in checks {
            let result = check.execute();
            log::debug!(
                "Gate {} check {}: {}",
                self.gate,
                result.name,
                if result.passed { "passed" } else { "failed" }
            );
            observer.check_finished(&result);
            results.push(result);
        }

        let report = GateReport::new(self.gate.clone(), results);
        observer.gate_finished(&report);
        report
    }
}
