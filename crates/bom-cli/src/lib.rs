//! CLI library components for the BOM transformer.

pub mod commands;
pub mod error;
pub mod logging;
pub mod summary;
pub mod types;

pub use commands::{execute, run, run_categories};
pub use error::RunError;
pub use types::{RunOptions, RunResult};
