//! keyextract: JSON Key Extraction CLI Tool
//!
//! Extracts a subset of keys from each object in a JSON list file and
//! writes the reduced records to json_output.json or json_output.csv.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use keyextract::cli::{run_extract, Cli, ExtractConfig};
use keyextract::pipeline::ExtractError;
use keyextract::utils::{print_error, print_error_detail};

fn main() -> ExitCode {
    // Missing or malformed flags exit here via clap with its usage code
    let cli = Cli::parse();
    // Read from the flags: key-count errors occur before a config exists
    let verbose = cli.verbose;

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_error(&err.to_string());
            if verbose {
                match err.downcast_ref::<ExtractError>().and_then(ExtractError::detail) {
                    Some(detail) => print_error_detail(&detail),
                    None => {
                        for cause in err.chain().skip(1) {
                            print_error_detail(&cause.to_string());
                        }
                    }
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = ExtractConfig::from_cli(cli)?;
    run_extract(&config)?;
    Ok(())
}
