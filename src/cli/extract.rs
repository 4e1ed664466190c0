//! Key extraction command: load, validate, filter and write in one pass

use std::time::Instant;

use anyhow::Result;

use super::config::ExtractConfig;
use crate::pipeline::{filter_records, load_records};
use crate::report::{write_output, ExtractionSummary};
use crate::utils::{
    finish_and_clear, finish_with_success, print_banner, print_completion, print_config,
    print_info, print_step_header, print_success, spinner_for,
};

/// Run one extraction for the given configuration.
///
/// Every validation failure aborts before the output file is touched, so a
/// failed run never creates or modifies the output.
pub fn run_extract(config: &ExtractConfig) -> Result<ExtractionSummary> {
    let started = Instant::now();
    let output_path = config.output_path();
    let loud = !config.quiet;

    if loud {
        print_banner(env!("CARGO_PKG_VERSION"));
        print_config(
            &config.input,
            config.keys.keys(),
            config.format.label(),
            &output_path,
        );
        print_step_header(1, "Load Input");
    }

    let spinner = spinner_for("Reading JSON file...", config.quiet);
    let records = match load_records(&config.input) {
        Ok(records) => records,
        Err(e) => {
            finish_and_clear(&spinner);
            return Err(e.into());
        }
    };
    finish_with_success(&spinner, &format!("Loaded {} record(s)", records.len()));

    if loud {
        if records.is_empty() {
            print_info("Input array is empty; output will contain no records");
        }
        print_step_header(2, "Validate Keys");
    }

    let filtered = filter_records(&records, &config.keys)?;

    if loud {
        print_success(&format!(
            "All {} key(s) present in every record",
            config.keys.len()
        ));
        print_step_header(3, "Write Output");
    }

    let spinner = spinner_for(
        &format!("Writing {} output...", config.format.label()),
        config.quiet,
    );
    let bytes_written = match write_output(&filtered, &config.keys, config.format, &output_path) {
        Ok(n) => n,
        Err(e) => {
            finish_and_clear(&spinner);
            return Err(e.into());
        }
    };
    finish_with_success(
        &spinner,
        &format!(
            "{} output written to {}",
            config.format.label(),
            output_path.display()
        ),
    );

    let summary = ExtractionSummary {
        input: config.input.clone(),
        output: output_path,
        format: config.format,
        records: filtered.len(),
        keys: config.keys.keys().to_vec(),
        bytes_written,
        elapsed: started.elapsed(),
    };

    if loud {
        summary.display();
        print_completion();
    }

    Ok(summary)
}
