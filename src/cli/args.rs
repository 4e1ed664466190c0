//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// keyextract - Extract a subset of keys from a JSON list file and output as JSON or CSV
#[derive(Parser, Debug)]
#[command(name = "keyextract")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Filename of the JSON file containing a list of objects.
    /// Relative names are resolved against the directory of this program
    /// (or --base-dir when given).
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: PathBuf,

    /// Number of JSON keys to extract. Must match the number of keys in -k.
    #[arg(short = 'n', long = "count", value_name = "COUNT", value_parser = validate_key_count)]
    pub count: usize,

    /// Comma-separated JSON keys to extract, in output order (e.g. key1,key2,...)
    #[arg(short = 'k', long = "keys", value_name = "KEY1,KEY2,...")]
    pub keys: String,

    /// Write CSV (json_output.csv) instead of JSON (json_output.json)
    #[arg(short = 'c', long = "csv", default_value = "false")]
    pub csv: bool,

    /// Directory used to resolve a relative -f filename
    #[arg(long, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Directory the output file is written to
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Suppress banner, progress and summary output
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,

    /// Print the underlying cause when a run fails
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,
}

/// Validator for the -n key count
fn validate_key_count(s: &str) -> Result<usize, String> {
    let value: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a valid positive integer", s))?;

    if value == 0 {
        Err("key count must be at least 1".to_string())
    } else {
        Ok(value)
    }
}
