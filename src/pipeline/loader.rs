//! Input loader for JSON list-of-objects files

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use super::error::{ExtractError, LoadFailure};

/// A single JSON object from the input array.
pub type Record = Map<String, Value>;

/// Resolve the `-f` filename against a base directory.
///
/// Absolute paths are returned unchanged. Relative paths are joined onto
/// `base_dir` when given, otherwise onto the directory holding the running
/// executable (falling back to the working directory if that is unknown).
pub fn resolve_input_path(file: &Path, base_dir: Option<&Path>) -> PathBuf {
    if file.is_absolute() {
        return file.to_path_buf();
    }

    match base_dir {
        Some(dir) => dir.join(file),
        None => executable_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(file),
    }
}

fn executable_dir() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    exe.parent().map(Path::to_path_buf)
}

/// Load the records from a JSON file.
///
/// The file must exist and contain a JSON array whose elements are all
/// objects. Every failure maps to [`ExtractError::FileNotFound`].
pub fn load_records(path: &Path) -> Result<Vec<Record>, ExtractError> {
    if !path.is_file() {
        return Err(ExtractError::file_not_found(path, LoadFailure::Missing));
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| ExtractError::file_not_found(path, LoadFailure::Unreadable(e)))?;

    parse_records(&contents).map_err(|reason| ExtractError::file_not_found(path, reason))
}

/// Parse and shape-check JSON text as a list of objects.
pub fn parse_records(contents: &str) -> Result<Vec<Record>, LoadFailure> {
    let value: Value = serde_json::from_str(contents).map_err(LoadFailure::InvalidJson)?;

    let Value::Array(items) = value else {
        return Err(LoadFailure::NotAnArray);
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(map) => Ok(map),
            _ => Err(LoadFailure::NotAnObject { index }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_of_objects() {
        let records = parse_records(r#"[{"a": 1}, {"a": 2, "b": "x"}]"#).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["b"], Value::String("x".to_string()));
    }

    #[test]
    fn test_parse_empty_array() {
        let records = parse_records("[]").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_rejects_top_level_object() {
        let err = parse_records(r#"{"a": 1}"#).unwrap_err();
        assert!(matches!(err, LoadFailure::NotAnArray));
    }

    #[test]
    fn test_parse_rejects_non_object_element() {
        let err = parse_records(r#"[{"a": 1}, 5, {"a": 2}]"#).unwrap_err();
        assert!(matches!(err, LoadFailure::NotAnObject { index: 1 }));
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let err = parse_records("[{\"a\": 1},").unwrap_err();
        assert!(matches!(err, LoadFailure::InvalidJson(_)));
    }

    #[test]
    fn test_resolve_absolute_path_unchanged() {
        let abs = std::env::temp_dir().join("input.json");
        assert_eq!(resolve_input_path(&abs, Some(Path::new("/elsewhere"))), abs);
    }

    #[test]
    fn test_resolve_relative_against_base_dir() {
        let resolved = resolve_input_path(Path::new("input.json"), Some(Path::new("data")));
        assert_eq!(resolved, PathBuf::from("data/input.json"));
    }

    #[test]
    fn test_resolve_relative_against_executable_dir() {
        let resolved = resolve_input_path(Path::new("input.json"), None);
        let exe_dir = std::env::current_exe().unwrap().parent().unwrap().to_path_buf();
        assert_eq!(resolved, exe_dir.join("input.json"));
    }
}
