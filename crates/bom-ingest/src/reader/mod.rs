//! Delimited-text reading.

mod header;
mod table;

pub use header::dedupe_headers;
pub use table::{LoadedBom, parse_bom_csv, read_bom_file};
