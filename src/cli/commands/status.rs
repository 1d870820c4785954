//! Status command - list tasks by status

use std::path::Path;
use std::process::ExitCode;

use docops::output::{OutputMode, TaskListResult};

use super::with_board;

/// Query tasks in `status` and print them as a table
pub fn status(config_path: &Path, status: &str, mode: OutputMode) -> anyhow::Result<ExitCode> {
    let tasks = with_board(config_path, |board| board.query_by_status(status))?;

    TaskListResult {
        status: status.to_string(),
        tasks,
    }
    .render(mode);

    Ok(ExitCode::SUCCESS)
}
