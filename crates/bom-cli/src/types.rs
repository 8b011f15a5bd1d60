use std::path::PathBuf;

use bom_model::{BomConfig, IssueLedger};

/// Inputs of one transform run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    /// Defaults to the input file stem.
    pub project_name: Option<String>,
    pub mapping: Option<PathBuf>,
    /// Overrides encoding detection.
    pub encoding: Option<String>,
}

#[derive(Debug)]
pub struct RunResult {
    pub project: String,
    pub encoding: String,
    pub input_rows: usize,
    pub output_file: PathBuf,
    /// Absent when report generation is disabled.
    pub report_file: Option<PathBuf>,
    pub ledger: IssueLedger,
    pub config: BomConfig,
}
