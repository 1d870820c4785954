//! Gate 3: verification
//!
//! Pre-commit gate: lint, build, secret scan, task sync. Lint, build and the
//! secret scan are critical; a sync problem is only a warning.

use crate::core::models::CheckOutcome;
use crate::core::ports::{CommandOutput, CommandRunner, VersionControl};
use crate::core::services::{GateCheck, SecretScanner, TaskBoard};

/// Gate name used in reports and logs
pub const GATE_NAME: &str = "verification";

/// Most characters of tool output kept in a failed check
pub const MAX_TOOL_OUTPUT_CHARS: usize = 500;

/// Where the sync check gets its tasks from
#[derive(Debug)]
pub enum SyncTarget<'a> {
    /// No `.env`: sync is skipped and counts as passed
    NotConfigured,
    /// Configured, but the board could not be set up
    Unavailable(String),
    /// A board to query
    Board(&'a TaskBoard<'a>),
}

/// Collaborators the verification checks need
pub struct VerificationContext<'a> {
    /// Runs lint and build
    pub runner: &'a dyn CommandRunner,
    /// Lists staged files
    pub vcs: &'a dyn VersionControl,
    /// Scans staged files
    pub scanner: &'a SecretScanner,
    /// Task sync target
    pub sync: SyncTarget<'a>,
}

impl std::fmt::Debug for VerificationContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerificationContext")
            .field("scanner", &self.scanner)
            .field("sync", &self.sync)
            .finish_non_exhaustive()
    }
}

/// First `max` characters of `text`, marked when cut
fn truncate_output(text: &str, max: usize) -> String {
    let mut out: String = text.trim().chars().take(max).collect();
    if text.trim().chars().count() > max {
        out.push_str("\n…");
    }
    out
}

/// Outcome of an npm script run
fn tool_outcome(output: &CommandOutput) -> CheckOutcome {
    if output.success {
        return CheckOutcome::pass();
    }

    let combined = output.combined();
    if combined.trim().is_empty() {
        let status = output.code.map_or_else(|| "signal".to_string(), |c| c.to_string());
        CheckOutcome::fail(format!("exited with status {status}"))
    } else {
        CheckOutcome::fail(truncate_output(&combined, MAX_TOOL_OUTPUT_CHARS))
    }
}

/// Verification checks, in execution order
#[must_use]
pub fn checks<'a>(ctx: VerificationContext<'a>) -> Vec<GateCheck<'a>> {
    let VerificationContext {
        runner,
        vcs,
        scanner,
        sync,
    } = ctx;

    vec![
        GateCheck::critical("linting", "ESLint check", move || {
            Ok(tool_outcome(&runner.run("npm", &["run", "lint"])?))
        }),
        GateCheck::critical("build", "Production build", move || {
            Ok(tool_outcome(&runner.run("npm", &["run", "build"])?))
        }),
        GateCheck::critical("secrets_check", "Secrets check", move || {
            let staged = match vcs.staged_files() {
                Ok(staged) => staged,
                Err(e) => {
                    log::warn!("Could not get staged files: {e:#}");
                    return Ok(CheckOutcome::pass_with("could not get staged files"));
                },
            };
            if staged.is_empty() {
                return Ok(CheckOutcome::pass_with("no staged files to check"));
            }

            let report = scanner.scan(&staged);
            if report.clean() {
                return Ok(CheckOutcome::pass_with(format!(
                    "no secrets detected in {} file(s)",
                    report.files_scanned
                )));
            }

            let mut lines = vec![format!("{} potential secret(s) found:", report.matches.len())];
            lines.extend(report.matches.iter().map(ToString::to_string));
            Ok(CheckOutcome::fail(lines.join("\n")))
        }),
        GateCheck::advisory("notion_sync", "Notion sync", move || match sync {
            SyncTarget::NotConfigured => Ok(CheckOutcome::pass_with("skipped (.env not configured)")),
            SyncTarget::Unavailable(reason) => Ok(CheckOutcome::fail(reason)),
            SyncTarget::Board(board) => {
                let tasks = board.query_ready()?;
                Ok(CheckOutcome::pass_with(format!("{} ready tasks", tasks.len())))
            },
        }),
    ]
}
