//! keyextract: JSON Key Extraction Library
//!
//! Loads a JSON file holding a list of objects, keeps a chosen subset of
//! keys from every object, and writes the result as JSON or CSV.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
