//! Validation-and-transform pipeline for BOM tables.
//!
//! Raw rows flow through an ordered list of steps (see [`pipeline`]), each
//! of which may mutate the working table and append findings to the shared
//! [`IssueLedger`](bom_model::IssueLedger). The sorted table is finally
//! projected onto the configured output schema.

pub mod classify;
pub mod normalize;
pub mod pipeline;
pub mod sort;

pub use classify::{add_category_columns, classify, classify_cell, top_level_segment};
pub use normalize::{normalize_fields, normalize_quantities, parse_quantity, trim_text_cells};
pub use pipeline::{TransformOutput, TransformPipeline, TransformStep, transform};
pub use sort::{add_display_column, project, resolve_sort_keys, sort_rows};
