//! docops - workflow gates for Notion-tracked projects
//!
//! This library provides the process gates of the docops methodology:
//! a preflight check before work starts, a task-status wrapper around the
//! Notion API, a pre-commit verification gate, and an append-only handoff log.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod env;
pub mod error;
pub mod gates;
pub mod logging;
pub mod output;
pub mod paths;

pub use error::DocopsError;
