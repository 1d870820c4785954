//! Workflow gates
//!
//! A gate evaluates its checks in order, prints each result as it lands,
//! and records the outcome in the text log:
//!
//! - [`preflight`] - Gate 0, before work starts
//! - [`verification`] - Gate 3, before every commit

pub mod preflight;
pub mod verification;

use std::path::Path;

use crate::adapters::{GitVersionControl, NotionClient, SystemRunner};
use crate::config::DocopsConfig;
use crate::core::models::{GateReport, GateStatus};
use crate::core::services::{GateEvaluator, SecretScanner, TaskBoard};
use crate::env::{Credentials, DATABASE_VAR, TOKEN_VAR};
use crate::output::{self, ConsoleObserver, OutputMode};
use crate::paths;

use preflight::PreflightContext;
use verification::{SyncTarget, VerificationContext};

/// Record a finished gate in the log, warning when it failed
fn log_outcome(gate_number: u8, report: &GateReport) {
    let message = format!("Gate {gate_number} completed with status: {}", report.overall_status);
    match report.overall_status {
        GateStatus::Pass => log::info!("{message}"),
        GateStatus::Fail => log::warn!("{message}"),
    }
}

/// Run Gate 0 against the project at `root`.
///
/// Credentials come from the process environment (after `.env` loading).
/// A client that cannot be built fails the connection check.
pub fn run_preflight(root: &Path, config: &DocopsConfig, mode: OutputMode) -> GateReport {
    output::print_banner("DOCOPS - GATE 0: PREFLIGHT CHECK", mode);

    let credentials = Credentials::from_env();
    let client = credentials.as_ref().and_then(|credentials| {
        NotionClient::from_credentials(credentials)
            .map_err(|e| log::error!("Could not create Notion client: {e}"))
            .ok()
    });
    let board = credentials
        .as_ref()
        .zip(client.as_ref())
        .map(|(credentials, client)| TaskBoard::new(client, config, &credentials.database_id));
    let vcs = GitVersionControl::new(root.to_path_buf());

    let ctx = PreflightContext {
        root,
        credentials: credentials.as_ref(),
        board: board.as_ref(),
        vcs: &vcs,
    };
    log::debug!("Running preflight in {}", root.display());

    let report = GateEvaluator::new(preflight::GATE_NAME)
        .evaluate(preflight::checks(&ctx), &mut ConsoleObserver::new(mode));
    log_outcome(0, &report);

    output::print_verdict(
        &report,
        "✅ Gate 0 PASSED - Ready to proceed!",
        "❌ Gate 0 FAILED - Please fix issues before proceeding.",
        mode,
    );
    report
}

/// Everything the sync check needs once `.env` is present
struct SyncSetup {
    config: DocopsConfig,
    credentials: Credentials,
    client: NotionClient,
}

impl SyncSetup {
    fn load(config_path: &Path) -> Result<Self, String> {
        let config = DocopsConfig::load(config_path).map_err(|e| e.to_string())?;
        let credentials = Credentials::from_env()
            .ok_or_else(|| format!("{TOKEN_VAR} and {DATABASE_VAR} must both be set"))?;
        let client = NotionClient::from_credentials(&credentials).map_err(|e| e.to_string())?;
        Ok(Self {
            config,
            credentials,
            client,
        })
    }
}

/// Run Gate 3 against the project at `root`.
///
/// Task sync is attempted only when `.env` exists; any problem setting it up
/// is reported on the sync check instead of aborting the gate.
pub fn run_verification(root: &Path, config_path: &Path, mode: OutputMode) -> GateReport {
    output::print_banner("DOCOPS - GATE 3: VERIFICATION", mode);

    let setup = paths::env_file(root)
        .is_file()
        .then(|| SyncSetup::load(config_path));
    let board = match &setup {
        Some(Ok(setup)) => Some(TaskBoard::new(
            &setup.client,
            &setup.config,
            &setup.credentials.database_id,
        )),
        _ => None,
    };
    let sync = match (&setup, &board) {
        (_, Some(board)) => SyncTarget::Board(board),
        (Some(Err(reason)), None) => SyncTarget::Unavailable(reason.clone()),
        _ => SyncTarget::NotConfigured,
    };

    let runner = SystemRunner::new(root.to_path_buf());
    let vcs = GitVersionControl::new(root.to_path_buf());
    let scanner = SecretScanner::new(root);
    let ctx = VerificationContext {
        runner: &runner,
        vcs: &vcs,
        scanner: &scanner,
        sync,
    };

    let report = GateEvaluator::new(verification::GATE_NAME)
        .evaluate(verification::checks(ctx), &mut ConsoleObserver::new(mode));
    log_outcome(3, &report);

    output::print_verdict(
        &report,
        "✅ Gate 3 PASSED - Ready to commit!",
        "❌ Gate 3 FAILED - Please fix issues before committing.",
        mode,
    );
    report
}
