//! Handoff command - record a session handoff

use std::path::Path;
use std::process::ExitCode;

use docops::adapters::HandoffLog;
use docops::core::models::HandoffEntry;
use docops::output::{OperationResult, OutputMode};
use docops::paths;

/// Append `entry` to the project's handoff log
pub fn handoff(root: &Path, entry: HandoffEntry, mode: OutputMode) -> anyhow::Result<ExitCode> {
    let log = HandoffLog::new(paths::handoff_file(root));
    let agent = entry.agent.clone();
    let count = log.append(entry)?;
    log::info!("Handoff updated by {agent} ({count} total)");

    OperationResult {
        success: true,
        message: "Handoff updated successfully".to_string(),
    }
    .render(mode);
    Ok(ExitCode::SUCCESS)
}
