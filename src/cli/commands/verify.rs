//! Verify command - Gate 3

use std::path::Path;
use std::process::ExitCode;

use docops::gates;
use docops::output::OutputMode;

use super::gate_exit;

/// Run the verification gate
pub fn verify(root: &Path, config_path: &Path, mode: OutputMode) -> anyhow::Result<ExitCode> {
    let report = gates::run_verification(root, config_path, mode);
    Ok(gate_exit(&report))
}
