//! Business logic services
//!
//! Orchestration logic that operates on domain models and port traits.
//!
//! - [`gate`] - Run ordered checks and aggregate them into a gate report
//! - [`scanner`] - Scan candidate files for likely secrets
//! - [`board`] - Query and move tasks through a task service

pub mod board;
pub mod gate;
pub mod scanner;

pub use board::{TaskBoard, status_update};
pub use gate::{CheckFn, GateCheck, GateEvaluator, GateObserver, SilentObserver};
pub use scanner::{SecretScanner, scan_content, should_skip};
