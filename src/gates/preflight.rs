//! Gate 0: preflight
//!
//! Validates environment, credentials, connectivity and repository state
//! before work starts.

use std::path::Path;

use crate::core::models::CheckOutcome;
use crate::core::ports::VersionControl;
use crate::core::services::{GateCheck, TaskBoard};
use crate::env::{Credentials, DATABASE_VAR, TOKEN_VAR};
use crate::paths;

/// Gate name used in reports and logs
pub const GATE_NAME: &str = "preflight";

/// Collaborators the preflight checks need
#[derive(Clone, Copy)]
pub struct PreflightContext<'a> {
    /// Project root
    pub root: &'a Path,
    /// Credentials, if both variables are set
    pub credentials: Option<&'a Credentials>,
    /// Task board; absent without credentials or a working client
    pub board: Option<&'a TaskBoard<'a>>,
    /// Version control
    pub vcs: &'a dyn VersionControl,
}

impl std::fmt::Debug for PreflightContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreflightContext")
            .field("root", &self.root)
            .field("credentials", &self.credentials)
            .field("board", &self.board.is_some())
            .finish_non_exhaustive()
    }
}

/// Preflight checks, in execution order
#[must_use]
pub fn checks<'a>(ctx: &PreflightContext<'a>) -> Vec<GateCheck<'a>> {
    let root = ctx.root;
    let credentials = ctx.credentials;
    let board = ctx.board;
    let vcs = ctx.vcs;

    vec![
        GateCheck::critical("env_file_exists", ".env file exists", move || {
            let path = paths::env_file(root);
            Ok(CheckOutcome::from_bool(path.is_file(), format!("{} not found", path.display())))
        }),
        GateCheck::critical("env_vars_present", "Required environment variables", move || {
            Ok(CheckOutcome::from_bool(
                credentials.is_some(),
                format!("{TOKEN_VAR} and {DATABASE_VAR} must both be set"),
            ))
        }),
        GateCheck::critical("notion_api_connection", "Notion API connection", move || {
            let Some(board) = board else {
                return Ok(CheckOutcome::fail("no credentials configured"));
            };
            match board.check_connection() {
                Ok(()) => Ok(CheckOutcome::pass()),
                Err(e) => {
                    log::error!("Notion connection failed: {e}");
                    Ok(CheckOutcome::fail(e.to_string()))
                },
            }
        }),
        GateCheck::advisory("git_status_clean", "Git status clean", move || {
            let changes = vcs.uncommitted_changes()?;
            Ok(CheckOutcome::from_bool(
                changes.is_empty(),
                format!("{} uncommitted change(s)", changes.len()),
            ))
        }),
        GateCheck::advisory("required_directories", "Required directories", move || {
            let missing: Vec<&str> =
                paths::REQUIRED_DIRS.into_iter().filter(|d| !root.join(d).is_dir()).collect();
            Ok(CheckOutcome::from_bool(missing.is_empty(), format!("missing: {}", missing.join(", "))))
        }),
    ]
}
