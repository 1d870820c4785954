//! CLI definitions and entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use super::commands;
use docops::core::models::READY_STATUS;
use docops::output::OutputMode;
use docops::{env, logging, paths};

/// docops - Workflow gates for Notion-tracked projects
#[derive(Parser, Debug)]
#[command(
    name = "docops",
    version,
    about = "Workflow gates for Notion-tracked projects",
    long_about = "Gate work on a Notion task board.\n\n\
                  Preflight validates the environment before work starts.\n\
                  Verify runs lint, build and a secret scan before every commit."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to the configuration file [default: docops/docops_config.json]
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run Gate 0 preflight checks
    Preflight,

    /// List tasks with a given status
    Status {
        /// Status to query
        #[arg(short, long, default_value = READY_STATUS)]
        status: String,
    },

    /// Sync with the Notion database
    Sync,

    /// Move a task to another status
    Move {
        /// Notion page ID of the task
        page_id: String,

        /// New status name
        status: String,
    },

    /// Append a session handoff to docops/handoff.json
    Handoff {
        /// Agent writing the handoff
        #[arg(short, long)]
        agent: Option<String>,

        /// Session identifier
        #[arg(long, default_value = "")]
        session_id: String,

        /// Task finished in this session (repeatable)
        #[arg(long = "completed", value_name = "TASK")]
        completed: Vec<String>,

        /// Next step for the following session (repeatable)
        #[arg(long = "next", value_name = "STEP")]
        next: Vec<String>,

        /// Free-form notes
        #[arg(short, long, default_value = "")]
        notes: String,
    },

    /// Run Gate 3 verification (lint, build, secret scan, sync)
    Verify,
}

/// Run the CLI
pub fn run() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // --help and --version are not usage errors
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        },
    };

    match dispatch(cli) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("❌ Error: {e:#}");
            ExitCode::FAILURE
        },
    }
}

fn dispatch(cli: Cli) -> anyhow::Result<ExitCode> {
    let root = paths::project_root();
    let dotenv = env::load_dotenv(&root);
    logging::init(cli.verbose, Some(&paths::log_file(&root)));
    env::log_dotenv(&dotenv);

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    let config_path = cli.config.unwrap_or_else(|| paths::config_file(&root));

    match cli.command {
        Some(Command::Preflight) => commands::preflight(&root, &config_path, output_mode),
        Some(Command::Status { status }) => commands::status(&config_path, &status, output_mode),
        Some(Command::Sync) => commands::sync(&config_path, output_mode),
        Some(Command::Move { page_id, status }) => {
            commands::move_task(&config_path, &page_id, &status, output_mode)
        },
        Some(Command::Handoff {
            agent,
            session_id,
            completed,
            next,
            notes,
        }) => {
            let entry = docops::core::models::HandoffEntry::new(agent)
                .with_session_id(session_id)
                .with_tasks_completed(completed)
                .with_next_steps(next)
                .with_notes(notes);
            commands::handoff(&root, entry, output_mode)
        },
        Some(Command::Verify) => commands::verify(&root, &config_path, output_mode),
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": docops::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("docops v{}", docops::VERSION);
                println!("\nUsage: docops <command>");
                println!("\nAvailable commands:");
                println!("  preflight  - Run Gate 0 preflight checks");
                println!("  status     - Query tasks in '{READY_STATUS}' status");
                println!("  sync       - Sync with Notion database");
                println!("  move       - Move a task to another status");
                println!("  handoff    - Record a session handoff");
                println!("  verify     - Run Gate 3 verification");
            }
            Ok(ExitCode::SUCCESS)
        },
    }
}
