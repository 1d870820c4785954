//! Sync command - refresh the ready queue

use std::path::Path;
use std::process::ExitCode;

use colored::Colorize;
use docops::core::models::READY_STATUS;
use docops::output::{OperationResult, OutputMode, TaskListResult};

use super::with_board;

/// Query ready tasks, list them and report how many there are
pub fn sync(config_path: &Path, mode: OutputMode) -> anyhow::Result<ExitCode> {
    if mode == OutputMode::Human {
        println!("{}", "Syncing with Notion...".cyan().bold());
    }

    let tasks = with_board(config_path, |board| board.query_ready())?;
    let message = format!("Sync complete. Found {} ready tasks.", tasks.len());
    log::info!("{message}");

    match mode {
        OutputMode::Human => {
            TaskListResult {
                status: READY_STATUS.to_string(),
                tasks,
            }
            .render(mode);
            println!("{}", message.green().bold());
        },
        OutputMode::Json => OperationResult {
            success: true,
            message,
        }
        .render(mode),
    }
    Ok(ExitCode::SUCCESS)
}
