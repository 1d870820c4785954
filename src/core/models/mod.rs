//! Domain models for docops
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`CheckResult`] - Outcome of one named check in a gate
//! - [`GateReport`] - All results of a gate run plus its overall status
//! - [`Criticality`] - Whether a check can fail its gate
//! - [`SecretMatch`] - A likely secret found in a file
//! - [`HandoffEntry`] - A session handoff note
//! - [`Task`] - A tracked task, flattened from a Notion page

mod check;
mod criticality;
mod handoff;
mod report;
mod secret;
mod task;

pub use check::{CheckOutcome, CheckResult};
pub use criticality::Criticality;
pub use handoff::{DEFAULT_AGENT, HandoffEntry};
pub use report::{GateReport, GateStatus};
pub use secret::{MAX_EXCERPT_CHARS, ScanReport, SecretMatch, SecretPattern, excerpt};
pub use task::{Page, PropertyValue, READY_STATUS, RichText, StatusValue, Task, UNKNOWN_STATUS};
