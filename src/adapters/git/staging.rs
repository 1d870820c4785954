//! Working tree and index inspection
//!
//! Provides utilities for detecting staged and uncommitted files.
//!
//! Paths are read NUL-terminated (`-z`) so git hands them over verbatim,
//! without quoting names that contain non-ASCII bytes or whitespace.

use std::path::Path;
use std::process::Command;

/// Run git in `workdir` and return stdout
fn git_stdout(workdir: &Path, args: &[&str]) -> anyhow::Result<String> {
    let output = Command::new("git").args(args).current_dir(workdir).output()?;

    if !output.status.success() {
        anyhow::bail!(
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Get list of staged files
///
/// # Errors
///
/// Returns an error if git command fails.
pub fn get_staged_files(workdir: &Path) -> anyhow::Result<Vec<String>> {
    let stdout = git_stdout(workdir, &["diff", "--cached", "--name-only", "-z"])?;
    Ok(stdout.split('\0').filter(|s| !s.is_empty()).map(String::from).collect())
}

/// Get paths with uncommitted changes, including untracked files
///
/// # Errors
///
/// Returns an error if git command fails.
pub fn get_uncommitted_changes(workdir: &Path) -> anyhow::Result<Vec<String>> {
    let stdout = git_stdout(workdir, &["status", "--porcelain", "-z"])?;
    Ok(parse_porcelain(&stdout))
}

/// Extract paths from `git status --porcelain -z` output.
///
/// Renames and copies carry their source path as an extra field, which is
/// dropped.
fn parse_porcelain(stdout: &str) -> Vec<String> {
    let mut paths = Vec::new();
    let mut entries = stdout.split('\0').filter(|entry| !entry.is_empty());

    while let Some(entry) = entries.next() {
        let Some((status, path)) = entry.split_at_checked(3) else {
            continue;
        };
        if status.contains(['R', 'C']) {
            entries.next();
        }
        paths.push(path.to_string());
    }

    paths
}
