//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and external systems (task tracker, git, subprocesses).
//!
//! Implementations live in the `adapters` module.

mod runner;
mod task_service;
mod vcs;

pub use runner::{CommandOutput, CommandRunner};
pub use task_service::{StatusCondition, StatusFilter, TaskService};
pub use vcs::VersionControl;
