//! Move command - change a task's status

use std::path::Path;
use std::process::ExitCode;

use docops::output::{OperationResult, OutputMode};

use super::with_board;

/// Set the status of `page_id` to `new_status`
pub fn move_task(
    config_path: &Path,
    page_id: &str,
    new_status: &str,
    mode: OutputMode,
) -> anyhow::Result<ExitCode> {
    with_board(config_path, |board| board.move_task(page_id, new_status))?;

    OperationResult {
        success: true,
        message: format!("Updated task status to: {new_status}"),
    }
    .render(mode);
    Ok(ExitCode::SUCCESS)
}
