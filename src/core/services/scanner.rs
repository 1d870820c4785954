//! Secret scanning
//!
//! Best-effort advisory scan of candidate files (typically the files staged
//! for commit) against a fixed, ordered list of patterns. This is string
//! matching, not a security guarantee: multi-line secrets and redacted
//! placeholders get no special treatment.

use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::core::models::{ScanReport, SecretMatch, SecretPattern};

/// Compiled patterns, in scan order
static PATTERNS: LazyLock<Vec<(SecretPattern, Regex)>> = LazyLock::new(|| {
    SecretPattern::ALL
        .into_iter()
        .map(|pattern| {
            let source = format!("(?i){}", pattern.regex_source());
            (pattern, Regex::new(&source).expect("secret patterns are valid regexes"))
        })
        .collect()
});

/// Extensions of binary/media files that are never scanned
const SKIPPED_EXTENSIONS: [&str; 10] =
    ["jpg", "jpeg", "png", "gif", "ico", "webp", "svg", "pdf", "woff", "woff2"];

/// Directory names whose contents are never scanned
const SKIPPED_DIRS: [&str; 1] = ["node_modules"];

/// Scans files under a root directory
#[derive(Debug, Clone)]
pub struct SecretScanner {
    root: PathBuf,
}

impl SecretScanner {
    /// Scanner resolving relative paths against `root`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Scan `paths`.
    ///
    /// Skipped files, missing files and unreadable files never fail the scan.
    /// An empty input is clean.
    pub fn scan<I, S>(&self, paths: I) -> ScanReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = ScanReport::default();

        for path in paths {
            let path = path.as_ref();
            if should_skip(path) {
                log::debug!("Skipping {path}");
                report.files_skipped += 1;
                continue;
            }

            let content = match fs::read_to_string(self.root.join(path)) {
                Ok(content) => content,
                Err(e) => {
                    log::debug!("Skipping unreadable {path}: {e}");
                    report.files_skipped += 1;
                    continue;
                },
            };

            report.files_scanned += 1;
            report.matches.extend(scan_content(path, &content));
        }

        report
    }
}

/// Whether a path is excluded from scanning by policy
#[must_use]
pub fn should_skip(path: &str) -> bool {
    let path = Path::new(path);

    let in_skipped_dir = path.components().any(|c| match c {
        Component::Normal(name) => SKIPPED_DIRS.iter().any(|d| name == *d),
        _ => false,
    });

    let skipped_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SKIPPED_EXTENSIONS.iter().any(|s| ext.eq_ignore_ascii_case(s)));

    in_skipped_dir || skipped_extension
}

/// Match `content` against every pattern, reporting the first hit of each
#[must_use]
pub fn scan_content(file_path: &str, content: &str) -> Vec<SecretMatch> {
    PATTERNS
        .iter()
        .filter_map(|(pattern, regex)| {
            regex.find(content).map(|m| SecretMatch::new(file_path, *pattern, m.as_str()))
        })
        .collect()
}
