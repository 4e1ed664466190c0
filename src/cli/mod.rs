//! CLI module - argument parsing, run configuration and the extract command

mod args;
mod config;
pub mod extract;

pub use args::Cli;
pub use config::ExtractConfig;
pub use extract::run_extract;
