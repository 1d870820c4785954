//! File-based storage
//!
//! - [`handoff`] - Append-only JSON handoff log

pub mod handoff;

pub use handoff::HandoffLog;
