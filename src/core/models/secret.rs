//! Secret scanning models

use serde::Serialize;

/// Longest excerpt a match may carry into a report
pub const MAX_EXCERPT_CHARS: usize = 50;

/// Secret detection patterns, in the order they are tried
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SecretPattern {
    /// `NOTION_API_TOKEN = secret_...`
    NotionToken,
    /// `NOTION_DATABASE_ID = <32 word characters>`
    NotionDatabaseId,
    /// `password = "..."`
    Password,
    /// `api_key = "..."` / `api-key = "..."` / `apikey = "..."`
    ApiKey,
    /// `secret = "..."`
    Secret,
}

impl SecretPattern {
    /// Every pattern, in scan order
    pub const ALL: [Self; 5] = [
        Self::NotionToken,
        Self::NotionDatabaseId,
        Self::Password,
        Self::ApiKey,
        Self::Secret,
    ];

    /// Stable identifier used in reports
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::NotionToken => "notion-token",
            Self::NotionDatabaseId => "notion-database-id",
            Self::Password => "password",
            Self::ApiKey => "api-key",
            Self::Secret => "secret",
        }
    }

    /// Regular expression source (matched case-insensitively)
    #[must_use]
    pub const fn regex_source(self) -> &'static str {
        match self {
            Self::NotionToken => r#"NOTION_API_TOKEN\s*=\s*["']?secret_\w+"#,
            Self::NotionDatabaseId => r#"NOTION_DATABASE_ID\s*=\s*["']?\w{32}"#,
            Self::Password => r#"password\s*=\s*["'].+["']"#,
            Self::ApiKey => r#"api[_-]?key\s*=\s*["'].+["']"#,
            Self::Secret => r#"secret\s*=\s*["'].+["']"#,
        }
    }
}

impl std::fmt::Display for SecretPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// A likely secret found in a file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecretMatch {
    /// Path of the file, as given to the scanner
    pub file_path: String,
    /// Which pattern matched
    pub pattern: SecretPattern,
    /// Bounded prefix of the matched text
    pub excerpt: String,
}

impl SecretMatch {
    /// Create a match, truncating the matched text to a bounded excerpt
    #[must_use]
    pub fn new(file_path: impl Into<String>, pattern: SecretPattern, matched: &str) -> Self {
        Self {
            file_path: file_path.into(),
            pattern,
            excerpt: excerpt(matched),
        }
    }
}

impl std::fmt::Display for SecretMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]: {}...", self.file_path, self.pattern, self.excerpt)
    }
}

/// First [`MAX_EXCERPT_CHARS`] characters of `text`
#[must_use]
pub fn excerpt(text: &str) -> String {
    text.chars().take(MAX_EXCERPT_CHARS).collect()
}

/// Outcome of scanning a set of files
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    /// Files whose content was inspected
    pub files_scanned: usize,
    /// Files skipped by policy or because they could not be read
    pub files_skipped: usize,
    /// Matches in file order, then pattern order
    pub matches: Vec<SecretMatch>,
}

impl ScanReport {
    /// Whether nothing suspicious was found
    #[must_use]
    pub fn clean(&self) -> bool {
        self.matches.is_empty()
    }
}
