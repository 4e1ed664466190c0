//! Shared test utilities and fixture generators

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Two seller records with domain, reseller and description keys
pub const SELLERS_JSON: &str = r#"[
    {"domain": "a.com", "reseller": "X", "description": "d1"},
    {"domain": "b.com", "reseller": "Y", "description": "d2"}
]"#;

/// Records with mixed value types under the same keys
pub const MIXED_JSON: &str = r#"[
    {"id": 1, "name": "alpha", "active": true, "score": 9.5, "tags": ["a", "b"], "note": null},
    {"id": 2, "name": "beta, gamma", "active": false, "score": 7, "tags": [], "note": "ok"},
    {"id": 3, "name": "delta", "active": true, "score": -1.25, "tags": ["c"], "note": null}
]"#;

/// Three records where the middle one lacks `reseller`
pub const MISSING_KEY_JSON: &str = r#"[
    {"domain": "a.com", "reseller": "X"},
    {"domain": "b.com"},
    {"domain": "c.com", "reseller": "Z"}
]"#;

/// Create a temporary directory holding one JSON input file
pub fn create_temp_json(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    (temp_dir, path)
}

/// Read a file to a string, panicking with the path on failure
pub fn read_to_string(path: &Path) -> String {
    std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e))
}

/// Assert that neither fixed-name output file exists in `dir`
pub fn assert_no_output(dir: &Path) {
    for name in ["json_output.json", "json_output.csv"] {
        assert!(
            !dir.join(name).exists(),
            "Unexpected output file created: {}",
            name
        );
    }
}
