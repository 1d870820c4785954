//! Integration tests for the verification gate

use predicates::prelude::*;

use crate::common::git_repo::TempGitRepo;
use crate::common::project::{CONFIG, docops_in, docops_verify_in, env_content};

/// Repository without a package.json, so lint and build cannot pass
fn repo_with_staged_secret() -> TempGitRepo {
    let repo = TempGitRepo::new();
    repo.write_file("README.md", "# App\n");
    repo.stage("README.md");
    repo.commit("Initial commit");

    repo.write_file("src/config.ts", "export const password = \"hunter22\";\n");
    repo.write_file("src/logo.png", "password = \"not scanned\"");
    repo.stage("src/config.ts");
    repo.stage("src/logo.png");
    repo
}

#[test]
fn test_verify_reports_staged_secret() {
    let repo = repo_with_staged_secret();

    docops_verify_in(repo.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("GATE 3: VERIFICATION"))
        .stdout(predicate::str::contains("❌ Secrets check"))
        .stdout(predicate::str::contains("1 potential secret(s) found:"))
        .stdout(predicate::str::contains("src/config.ts [password]"))
        .stdout(predicate::str::contains("logo.png [").not())
        .stdout(predicate::str::contains("Notion sync: skipped (.env not configured)"))
        .stdout(predicate::str::contains("Gate 3 FAILED - Please fix issues before committing."))
        .stdout(predicate::str::contains("  - linting"))
        .stdout(predicate::str::contains("  - secrets_check"))
        .stdout(predicate::str::contains("  - notion_sync").not());
}

#[test]
fn test_verify_scans_staged_file_with_non_ascii_name() {
    let repo = TempGitRepo::new();
    repo.write_file("README.md", "# App\n");
    repo.stage("README.md");
    repo.commit("Initial commit");

    repo.write_file("src/configuración.ts", "export const password = \"hunter22\";\n");
    repo.stage("src/configuración.ts");

    docops_verify_in(repo.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("❌ Secrets check"))
        .stdout(predicate::str::contains("src/configuración.ts [password]"))
        .stdout(predicate::str::contains("  - secrets_check"));
}

#[test]
fn test_verify_with_nothing_staged() {
    let repo = TempGitRepo::new();
    repo.write_file("README.md", "# App\n");
    repo.stage("README.md");
    repo.commit("Initial commit");

    docops_verify_in(repo.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("✅ Secrets check: no staged files to check"))
        .stdout(predicate::str::contains("  - secrets_check").not());
}

#[test]
fn test_verify_rejects_arguments() {
    let repo = TempGitRepo::new();
    docops_verify_in(repo.path()).arg("--now").assert().code(1);
}

#[test]
fn test_verify_subcommand_json_report() {
    let repo = repo_with_staged_secret();

    let output = docops_in(repo.path()).args(["verify", "--json"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["gate"], "verification");
    assert_eq!(report["overall_status"], "FAIL");
    assert_eq!(report["checks"]["secrets_check"]["passed"], false);
    assert_eq!(report["checks"]["notion_sync"]["passed"], true);
}

#[test]
fn test_verify_with_env_but_no_config_only_warns_on_sync() {
    let repo = TempGitRepo::new();
    repo.write_file(".env", &env_content());

    docops_in(repo.path())
        .arg("verify")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("⚠️ Notion sync: configuration file not found"))
        .stdout(predicate::str::contains("  - notion_sync").not());
}

#[test]
fn test_verify_sync_failure_is_advisory() {
    let repo = TempGitRepo::new();
    repo.write_file(".env", &env_content());
    repo.write_file("docops/docops_config.json", CONFIG);

    // Nothing listens on port 9
    docops_in(repo.path())
        .arg("verify")
        .env("NOTION_API_URL", "http://127.0.0.1:9/v1")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("⚠️ Notion sync: connectivity error"))
        .stdout(predicate::str::contains("  - notion_sync").not());
}
