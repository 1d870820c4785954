//! docops-verify - Gate 3 as a standalone pre-commit hook
//!
//! Runs lint, build, the staged-file secret scan and a task sync from the
//! project root. Exits 0 when the gate passes, 1 otherwise.

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    unsafe_code
)]

use std::process::ExitCode;

use docops::output::OutputMode;
use docops::{env, gates, logging, paths};

fn main() -> ExitCode {
    if std::env::args().len() > 1 {
        eprintln!("Usage: docops-verify");
        return ExitCode::FAILURE;
    }

    let root = paths::project_root();
    let dotenv = env::load_dotenv(&root);
    logging::init(false, Some(&paths::log_file(&root)));
    env::log_dotenv(&dotenv);

    let report = gates::run_verification(&root, &paths::config_file(&root), OutputMode::Human);
    if report.passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
