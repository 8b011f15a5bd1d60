//! BOM output generation.
//!
//! This crate renders the projected table and the issue ledger:
//!
//! - **XLSX**: formatted single-sheet workbook with a merged category column
//!   (feature `xlsx`, on by default)
//! - **CSV**: UTF-8 with a byte-order mark, for non-XLSX export formats
//! - **Text report**: header block, per-kind summary, per-issue detail

mod error;
mod export;
mod layout;
mod text;
mod xlsx;

pub use error::{ReportError, Result};
pub use export::{render_csv, write_csv, write_report};
pub use layout::{
    MergeRange, QUANTITY_COLUMN, QUANTITY_WIDTH, REFERENCE_COLUMN, REFERENCE_WIDTH, SheetLayout,
    column_widths, display_width, merge_ranges,
};
pub use text::{ReportHeader, render_report};
pub use xlsx::{render_xlsx, write_xlsx};
