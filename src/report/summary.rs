//! Extraction summary report

use std::path::PathBuf;
use std::time::Duration;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use super::output::OutputFormat;

/// Summary of a completed extraction run
#[derive(Debug, Clone)]
pub struct ExtractionSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub records: usize,
    pub keys: Vec<String>,
    pub bytes_written: usize,
    pub elapsed: Duration,
}

impl ExtractionSummary {
    /// Build the summary table without printing it
    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("📂 Input"),
            Cell::new(self.input.display()),
        ]);
        table.add_row(vec![
            Cell::new("📄 Records"),
            Cell::new(self.records).fg(if self.records == 0 {
                Color::Yellow
            } else {
                Color::White
            }),
        ]);
        table.add_row(vec![
            Cell::new("🔑 Keys"),
            Cell::new(format!("{} ({})", self.keys.len(), self.keys.join(", "))),
        ]);
        table.add_row(vec![
            Cell::new("🧾 Format"),
            Cell::new(self.format.label()).fg(Color::Cyan),
        ]);
        table.add_row(vec![
            Cell::new("💾 Output"),
            Cell::new(self.output.display())
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);
        table.add_row(vec![
            Cell::new("📦 Bytes Written"),
            Cell::new(self.bytes_written),
        ]);
        table.add_row(vec![
            Cell::new("⏱️  Elapsed"),
            Cell::new(format!("{:.2?}", self.elapsed)),
        ]);

        table
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("EXTRACTION SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        // Indent the table
        for line in self.to_table().to_string().lines() {
            println!("    {}", line);
        }
    }
}
