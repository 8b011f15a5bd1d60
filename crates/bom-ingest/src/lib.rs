//! BOM ingestion utilities.
//!
//! This crate turns the raw input of a run into the types the pipeline works
//! on:
//!
//! - **Encoding**: best-guess detection and strict decoding with fallbacks
//! - **CSV Loading**: header-first delimited text into a [`bom_model::BomTable`]
//! - **Configuration**: optional YAML overlay on top of the built-in defaults
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use bom_ingest::{load_config, read_bom_file};
//!
//! let config = load_config(Some(Path::new("mapping.yml")));
//! let loaded = read_bom_file(Path::new("PV3.csv"), None)?;
//! println!("{} rows ({})", loaded.table.len(), loaded.encoding);
//! ```

mod config;
mod encoding;
mod error;
mod reader;

// === Error Types ===
pub use error::{ConfigError, IngestError, Result};

// === Encoding ===
pub use encoding::{DecodedText, FALLBACK_ENCODINGS, decode, decode_with_fallback, detect_encoding};

// === CSV Reading ===
pub use reader::{LoadedBom, dedupe_headers, parse_bom_csv, read_bom_file};

// === Configuration ===
pub use config::{apply_overlay, load_config, try_load_config};
