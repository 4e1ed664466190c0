//! Output serialization and run summary

pub mod output;
pub mod summary;

pub use output::{
    csv_cell, render_csv, render_json, write_output, OutputFormat, CSV_OUTPUT_FILE,
    JSON_OUTPUT_FILE,
};
pub use summary::ExtractionSummary;
