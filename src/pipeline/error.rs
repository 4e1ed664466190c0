//! Error types for key extraction.
//!
//! The three user-facing failure messages are fixed strings. Details such as
//! the offending record index or the JSON parse error are kept in the
//! variant fields and the source chain, and are shown only in verbose mode.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while extracting keys from a JSON list file.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Input file is absent, unreadable, not JSON, or not a list of objects.
    #[error("JSON FILE NOT FOUND!")]
    FileNotFound {
        /// Resolved path that was attempted
        path: PathBuf,
        /// Why the file was rejected
        #[source]
        reason: LoadFailure,
    },

    /// At least one requested key is missing from at least one record.
    #[error("Requested KEY(s) not present in input file!")]
    KeysNotPresent {
        /// First missing key found
        key: String,
        /// Zero-based index of the record missing it
        record: usize,
    },

    /// The `-k` list does not contain exactly `-n` keys.
    #[error("Number of keys provided does not match the -n argument!")]
    KeyCountMismatch { expected: usize, actual: usize },

    /// The same key appears more than once in `-k`.
    #[error("Duplicate KEY requested: {0}")]
    DuplicateKey(String),

    /// Output file could not be created or written.
    #[error("Error writing output file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Records could not be serialized into the output format.
    #[error("Error writing {format} file: {reason}")]
    Serialize { format: &'static str, reason: String },
}

/// Why an input file was rejected as "not found".
#[derive(Debug, Error)]
pub enum LoadFailure {
    #[error("no regular file at this path")]
    Missing,

    #[error("file could not be read: {0}")]
    Unreadable(#[source] std::io::Error),

    #[error("file is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("top-level JSON value is not an array")]
    NotAnArray,

    #[error("element {index} of the array is not an object")]
    NotAnObject { index: usize },
}

impl ExtractError {
    /// Build a `FileNotFound` error for the given path and reason.
    pub fn file_not_found(path: impl Into<PathBuf>, reason: LoadFailure) -> Self {
        ExtractError::FileNotFound {
            path: path.into(),
            reason,
        }
    }

    /// Diagnostic detail behind the fixed user-facing message, if any.
    pub fn detail(&self) -> Option<String> {
        match self {
            ExtractError::FileNotFound { path, reason } => {
                Some(format!("{}: {}", path.display(), reason))
            }
            ExtractError::KeysNotPresent { key, record } => {
                Some(format!("key '{}' missing from record {}", key, record))
            }
            ExtractError::KeyCountMismatch { expected, actual } => Some(format!(
                "-n expects {} key(s) but -k lists {}",
                expected, actual
            )),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_fixed_messages() {
        let err = ExtractError::file_not_found("data.json", LoadFailure::Missing);
        assert_eq!(err.to_string(), "JSON FILE NOT FOUND!");

        let err = ExtractError::KeysNotPresent {
            key: "domain".to_string(),
            record: 3,
        };
        assert_eq!(err.to_string(), "Requested KEY(s) not present in input file!");

        let err = ExtractError::KeyCountMismatch {
            expected: 2,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "Number of keys provided does not match the -n argument!"
        );
    }

    #[test]
    fn test_file_not_found_exposes_reason_as_source() {
        let err = ExtractError::file_not_found("data.json", LoadFailure::NotAnObject { index: 4 });
        let source = err.source().expect("reason should be the source");
        assert_eq!(source.to_string(), "element 4 of the array is not an object");
    }

    #[test]
    fn test_detail_names_key_and_record() {
        let err = ExtractError::KeysNotPresent {
            key: "reseller".to_string(),
            record: 7,
        };
        assert_eq!(
            err.detail().as_deref(),
            Some("key 'reseller' missing from record 7")
        );
        assert!(ExtractError::DuplicateKey("a".to_string()).detail().is_none());
    }

    #[test]
    fn test_write_error_display() {
        let err = ExtractError::Write {
            path: PathBuf::from("out/json_output.csv"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            err.to_string(),
            "Error writing output file out/json_output.csv: denied"
        );
    }

    #[test]
    fn test_serialize_error_display() {
        let err = ExtractError::Serialize {
            format: "CSV",
            reason: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "Error writing CSV file: boom");
    }
}
