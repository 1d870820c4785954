//! Core domain logic for docops
//!
//! This module contains pure business logic with no I/O dependencies of its
//! own. All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`CheckResult`, `GateReport`, `SecretMatch`, `Task`)
//! - `services/` - Gate evaluation, secret scanning, task board
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
