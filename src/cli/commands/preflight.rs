//! Preflight command - Gate 0

use std::path::Path;
use std::process::ExitCode;

use docops::config::DocopsConfig;
use docops::gates;
use docops::output::OutputMode;

use super::gate_exit;

/// Run the preflight gate. A bad config aborts before any check runs.
pub fn preflight(root: &Path, config_path: &Path, mode: OutputMode) -> anyhow::Result<ExitCode> {
    let config = DocopsConfig::load(config_path)?;
    let report = gates::run_preflight(root, &config, mode);
    Ok(gate_exit(&report))
}
