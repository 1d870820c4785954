//! Command implementations

mod handoff;
mod move_task;
mod preflight;
mod status;
mod sync;
mod verify;

pub use handoff::handoff;
pub use move_task::move_task;
pub use preflight::preflight;
pub use status::status;
pub use sync::sync;
pub use verify::verify;

use std::path::Path;
use std::process::ExitCode;

use docops::DocopsError;
use docops::adapters::NotionClient;
use docops::config::DocopsConfig;
use docops::core::models::GateReport;
use docops::core::services::TaskBoard;
use docops::env::{Credentials, DATABASE_VAR, TOKEN_VAR};

/// Exit code for a finished gate
fn gate_exit(report: &GateReport) -> ExitCode {
    if report.passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Load config and credentials, then run `f` against the task board
fn with_board<T>(
    config_path: &Path,
    f: impl FnOnce(&TaskBoard<'_>) -> docops::error::Result<T>,
) -> anyhow::Result<T> {
    let config = DocopsConfig::load(config_path)?;
    let credentials = Credentials::from_env().ok_or_else(|| {
        DocopsError::Connectivity(format!("{TOKEN_VAR} and {DATABASE_VAR} must both be set"))
    })?;
    let client = NotionClient::from_credentials(&credentials)?;

    let board = TaskBoard::new(&client, &config, &credentials.database_id);
    Ok(f(&board)?)
}
