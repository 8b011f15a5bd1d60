//! CLI argument definitions for the BOM transformer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use bom_cli::types::RunOptions;

#[derive(Parser)]
#[command(
    name = "bom-transform",
    version,
    about = "BOM CSV 转换与校验",
    long_about = "Convert an exported BOM CSV into a classified, sorted spreadsheet.\n\n\
                  Writes a formatted XLSX (or CSV) and a plain-text quality report."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q hides issue details).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Transform a BOM file and write the spreadsheet and report.
    Run(RunArgs),

    /// List the effective category labels.
    Categories {
        /// Mapping config (YAML) to apply on top of the defaults.
        #[arg(long = "mapping", short = 'm', value_name = "FILE")]
        mapping: Option<PathBuf>,
    },
}

#[derive(Parser)]
pub struct RunArgs {
    /// Input CSV file.
    #[arg(long = "input", short = 'i', value_name = "FILE")]
    pub input: PathBuf,

    /// Output directory (created when missing).
    #[arg(long = "output-dir", short = 'o', value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Project name used in output file names (default: input file stem).
    #[arg(long = "project-name", short = 'p')]
    pub project_name: Option<String>,

    /// Mapping config (YAML) to apply on top of the defaults.
    #[arg(long = "mapping", short = 'm', value_name = "FILE")]
    pub mapping: Option<PathBuf>,

    /// Force the input encoding instead of detecting it.
    #[arg(long = "encoding", short = 'e')]
    pub encoding: Option<String>,
}

impl RunArgs {
    pub fn into_options(self) -> RunOptions {
        RunOptions {
            input: self.input,
            output_dir: self.output_dir,
            project_name: self.project_name,
            mapping: self.mapping,
            encoding: self.encoding,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
