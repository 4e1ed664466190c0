//! Extraction pipeline: load, validate and filter records

pub mod error;
pub mod filter;
pub mod keys;
pub mod loader;

pub use error::{ExtractError, LoadFailure};
pub use filter::{ensure_keys_present, filter_records};
pub use keys::KeySelection;
pub use loader::{load_records, parse_records, resolve_input_path, Record};
