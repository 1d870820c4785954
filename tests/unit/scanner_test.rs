//! Secret scanner over files on disk

use std::fs;

use docops::core::models::SecretPattern;
use docops::core::services::SecretScanner;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &[u8]) {
    let path = dir.path().join(name);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_scan_mixed_tree() {
    let dir = TempDir::new().unwrap();
    write(&dir, ".env.example", b"NOTION_API_TOKEN=secret_abc123\n");
    write(&dir, "src/api.ts", b"const API_KEY = 'k-123456';\nconst secret = \"s\";\n");
    write(&dir, "src/clean.ts", b"export const answer = 42;\n");
    write(&dir, "node_modules/pkg/index.js", b"password = \"x\"\n");
    write(&dir, "assets/LOGO.PNG", b"password = \"x\"\n");
    write(&dir, "bin/blob.dat", &[0xff, 0xfe, 0x00, 0x80]);

    let staged = [
        ".env.example",
        "src/api.ts",
        "src/clean.ts",
        "node_modules/pkg/index.js",
        "assets/LOGO.PNG",
        "bin/blob.dat",
        "deleted.ts",
    ];
    let report = SecretScanner::new(dir.path()).scan(staged);

    assert_eq!(report.files_scanned, 3);
    assert_eq!(report.files_skipped, 4);

    let found: Vec<(&str, SecretPattern)> =
        report.matches.iter().map(|m| (m.file_path.as_str(), m.pattern)).collect();
    assert_eq!(
        found,
        [
            (".env.example", SecretPattern::NotionToken),
            ("src/api.ts", SecretPattern::ApiKey),
            ("src/api.ts", SecretPattern::Secret),
        ]
    );
}

#[test]
fn test_long_match_excerpt_is_bounded() {
    let dir = TempDir::new().unwrap();
    let line = format!("password = \"{}\"\n", "x".repeat(200));
    write(&dir, "config.py", line.as_bytes());

    let report = SecretScanner::new(dir.path()).scan(["config.py"]);
    assert_eq!(report.matches.len(), 1);
    assert_eq!(report.matches[0].excerpt.chars().count(), 50);
}
