//! Integration tests for the docops CLI
//!
//! Each test runs the real binaries in a temporary project. Notion calls go
//! to a local fake server selected through `NOTION_API_URL`.

#[path = "../common/mod.rs"]
#[allow(dead_code)]
mod common;

mod verify_test;

use std::fs;

use common::notion_server::FakeNotion;
use common::project::{TempProject, docops_in};
use predicates::prelude::*;
use serde_json::Value;

// =============================================================================
// CLI BASICS
// =============================================================================

#[test]
fn test_help_lists_commands() {
    let project = TempProject::bare();
    project
        .docops()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("preflight"))
        .stdout(predicate::str::contains("handoff"))
        .stdout(predicate::str::contains("verify"));
}

#[test]
fn test_no_command_prints_usage_hint() {
    let project = TempProject::bare();
    project
        .docops()
        .assert()
        .success()
        .stdout(predicate::str::contains("Available commands:"))
        .stdout(predicate::str::contains("preflight  - Run Gate 0 preflight checks"));
}

#[test]
fn test_unknown_command_exits_one() {
    let project = TempProject::bare();
    project.docops().arg("frobnicate").assert().code(1);
}

#[test]
fn test_version_flag() {
    let project = TempProject::bare();
    project
        .docops()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// =============================================================================
// PREFLIGHT
// =============================================================================

#[test]
fn test_preflight_missing_config_is_fatal() {
    let project = TempProject::bare();
    project
        .docops()
        .arg("preflight")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Overall Status").not())
        .stderr(predicate::str::contains("❌ Error:"))
        .stderr(predicate::str::contains("docops_config.json"));
}

#[test]
fn test_preflight_invalid_config_is_fatal() {
    let project = TempProject::new();
    project.write_file(
        "docops/docops_config.json",
        r#"{"notion_config": {"properties": {"status_property_name": "Status"}}}"#,
    );

    project
        .docops()
        .arg("preflight")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("title_property_name"));
}

#[test]
fn test_preflight_fails_without_env() {
    let project = TempProject::new();

    project
        .docops()
        .arg("preflight")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("GATE 0: PREFLIGHT CHECK"))
        .stdout(predicate::str::contains("❌ .env file exists"))
        .stdout(predicate::str::contains("❌ Required environment variables"))
        .stdout(predicate::str::contains("❌ Notion API connection: no credentials configured"))
        .stdout(predicate::str::contains("✅ Required directories"))
        .stdout(predicate::str::contains("Overall Status: FAIL"))
        .stdout(predicate::str::contains("Gate 0 FAILED"))
        .stdout(predicate::str::contains("  - env_file_exists"));
}

#[test]
fn test_dotenv_can_set_log_level() {
    let project = TempProject::new();
    project.write_file(".env", "RUST_LOG=debug\n");

    project
        .docops()
        .arg("preflight")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("DEBUG - Loaded environment from"))
        .stderr(predicate::str::contains("DEBUG - Running preflight in"));
}

#[test]
fn test_preflight_json_report() {
    let project = TempProject::new();

    let output = project.docops().args(["--json", "preflight"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let report: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["gate"], "preflight");
    assert_eq!(report["overall_status"], "FAIL");
    assert_eq!(report["checks"]["env_file_exists"]["passed"], false);
    assert_eq!(report["checks"]["env_file_exists"]["criticality"], "critical");
    assert_eq!(report["checks"]["required_directories"]["passed"], true);
    assert_eq!(report["checks"]["git_status_clean"]["criticality"], "advisory");

    // Checks keep execution order, not alphabetical order
    let notion = stdout.find("\"notion_api_connection\"").unwrap();
    let git = stdout.find("\"git_status_clean\"").unwrap();
    assert!(notion < git);
}

#[test]
fn test_preflight_passes_against_reachable_api() {
    let project = TempProject::new();
    project.write_env();
    let notion = FakeNotion::start(Vec::new());

    project
        .docops()
        .arg("preflight")
        .env("NOTION_API_URL", notion.base_url())
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Notion API connection"))
        // Not a git repository: a warning, not a failure
        .stdout(predicate::str::contains("⚠️ Git status clean"))
        .stdout(predicate::str::contains("Overall Status: PASS"))
        .stdout(predicate::str::contains("Gate 0 PASSED - Ready to proceed!"));

    let requests = notion.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/v1/databases/db-123");
    assert_eq!(requests[0].notion_version.as_deref(), Some("2022-06-28"));

    let log = fs::read_to_string(project.path().join("docops/docops.log")).unwrap();
    assert!(log.contains(" - docops - INFO - Gate 0 completed with status: PASS"));
}

#[test]
fn test_preflight_rejected_token_fails_connection_check() {
    let project = TempProject::new();
    project.write_file(".env", "NOTION_API_TOKEN=secret_wrong\nNOTION_DATABASE_ID=db-123\n");
    let notion = FakeNotion::start(Vec::new());

    project
        .docops()
        .arg("preflight")
        .env("NOTION_API_URL", notion.base_url())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("❌ Notion API connection"))
        .stdout(predicate::str::contains("unauthorized"))
        .stdout(predicate::str::contains("  - notion_api_connection"));

    let log = fs::read_to_string(project.path().join("docops/docops.log")).unwrap();
    assert!(log.contains(" - docops - WARN - Gate 0 completed with status: FAIL"));
}

#[test]
fn test_preflight_reports_missing_directories() {
    let project = TempProject::bare();
    project.write_file("config.json", common::project::CONFIG);

    project
        .docops()
        .args(["preflight", "--config", "config.json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("⚠️ Required directories: missing: docops, scripts, src"));
}

#[test]
fn test_process_environment_wins_over_env_file() {
    let project = TempProject::new();
    project.write_file(".env", "NOTION_API_TOKEN=secret_wrong\nNOTION_DATABASE_ID=db-123\n");
    let notion = FakeNotion::start(Vec::new());

    docops_in(project.path())
        .arg("preflight")
        .env("NOTION_API_URL", notion.base_url())
        .env("NOTION_API_TOKEN", common::notion_server::TOKEN)
        .assert()
        .success();
}
