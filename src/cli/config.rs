//! Validated run configuration built once from the parsed arguments

use std::path::PathBuf;

use super::args::Cli;
use crate::pipeline::{resolve_input_path, ExtractError, KeySelection};
use crate::report::OutputFormat;

/// Everything a single extraction run needs
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Resolved input file path
    pub input: PathBuf,
    /// Keys to keep, in output order
    pub keys: KeySelection,
    pub format: OutputFormat,
    /// Directory the fixed-name output file is written to
    pub output_dir: PathBuf,
    pub quiet: bool,
}

impl ExtractConfig {
    /// Resolve paths and validate the key list against the declared count.
    pub fn from_cli(cli: &Cli) -> Result<Self, ExtractError> {
        let keys = KeySelection::parse(&cli.keys, cli.count)?;
        let input = resolve_input_path(&cli.file, cli.base_dir.as_deref());

        Ok(Self {
            input,
            keys,
            format: OutputFormat::from_csv_flag(cli.csv),
            output_dir: cli.output_dir.clone(),
            quiet: cli.quiet,
        })
    }

    /// Full path of the output file
    pub fn output_path(&self) -> PathBuf {
        self.format.output_path(&self.output_dir)
    }
}
