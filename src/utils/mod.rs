//! Utility modules for terminal output

mod progress;
mod styling;

pub use progress::*;
pub use styling::*;
