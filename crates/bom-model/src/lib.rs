//! Data model for the BOM transform pipeline.
//!
//! - [`CellValue`] / [`BomTable`]: the working row table
//! - [`ProjectedTable`]: rows projected onto the output schema
//! - [`Issue`] / [`IssueLedger`]: data-quality findings
//! - [`BomConfig`]: layered configuration with built-in defaults

pub mod cell;
pub mod columns;
pub mod config;
pub mod issue;
pub mod table;

pub use cell::CellValue;
pub use config::{BomConfig, BomOptions, ExportFormat, OutputColumn, ReportFormat};
pub use issue::{Issue, IssueKind, IssueLedger, IssueSummary};
pub use table::{BomTable, ProjectedTable, TableError};
