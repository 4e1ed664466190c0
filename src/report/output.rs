//! JSON and CSV serialization of filtered records

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use crate::pipeline::{ExtractError, KeySelection, Record};

/// Output file name for JSON results
pub const JSON_OUTPUT_FILE: &str = "json_output.json";

/// Output file name for CSV results
pub const CSV_OUTPUT_FILE: &str = "json_output.csv";

/// Format of the output file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Csv,
}

impl OutputFormat {
    pub fn from_csv_flag(csv: bool) -> Self {
        if csv {
            OutputFormat::Csv
        } else {
            OutputFormat::Json
        }
    }

    /// Fixed output file name for this format
    pub fn file_name(&self) -> &'static str {
        match self {
            OutputFormat::Json => JSON_OUTPUT_FILE,
            OutputFormat::Csv => CSV_OUTPUT_FILE,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OutputFormat::Json => "JSON",
            OutputFormat::Csv => "CSV",
        }
    }

    /// Output path inside the given directory
    pub fn output_path(&self, dir: &Path) -> PathBuf {
        dir.join(self.file_name())
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Serialize records as a pretty-printed JSON array (4-space indent).
pub fn render_json(records: &[Record]) -> Result<Vec<u8>, ExtractError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records
        .serialize(&mut ser)
        .map_err(|e| serialize_error(OutputFormat::Json, e))?;
    buf.push(b'\n');
    Ok(buf)
}

/// Serialize records as CSV with a header row of the selected keys.
pub fn render_csv(records: &[Record], keys: &KeySelection) -> Result<Vec<u8>, ExtractError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(keys.iter())
        .map_err(|e| serialize_error(OutputFormat::Csv, e))?;

    for record in records {
        let row = keys
            .iter()
            .map(|key| record.get(key).map(csv_cell).unwrap_or_default());
        writer
            .write_record(row)
            .map_err(|e| serialize_error(OutputFormat::Csv, e))?;
    }

    writer
        .into_inner()
        .map_err(|e| serialize_error(OutputFormat::Csv, e))
}

/// Render a JSON value as a single CSV cell.
///
/// Strings are written raw, null as an empty cell, and arrays/objects as
/// compact JSON text.
pub fn csv_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Serialize records in the given format and write them to `path`.
///
/// The full document is built in memory before the file is created, so a
/// serialization failure leaves no file behind. Returns the bytes written.
pub fn write_output(
    records: &[Record],
    keys: &KeySelection,
    format: OutputFormat,
    path: &Path,
) -> Result<usize, ExtractError> {
    let bytes = match format {
        OutputFormat::Json => render_json(records)?,
        OutputFormat::Csv => render_csv(records, keys)?,
    };

    std::fs::write(path, &bytes).map_err(|source| ExtractError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(bytes.len())
}

fn serialize_error(format: OutputFormat, err: impl std::fmt::Display) -> ExtractError {
    ExtractError::Serialize {
        format: format.label(),
        reason: err.to_string(),
    }
}
