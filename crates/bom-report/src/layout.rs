//! Sheet layout planning: merge ranges over the category column and column
//! widths. Independent of any spreadsheet writer.

use bom_model::{CellValue, ProjectedTable};

/// Display name of the position-designator column.
pub const REFERENCE_COLUMN: &str = "位号";
/// Display name of the quantity column.
pub const QUANTITY_COLUMN: &str = "数量";
pub const REFERENCE_WIDTH: f64 = 31.1;
pub const QUANTITY_WIDTH: f64 = 13.13;
const MAX_WIDTH: usize = 100;
const WIDTH_PADDING: usize = 2;

/// A maximal run of equal values, as inclusive zero-based data-row indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRange {
    pub start: usize,
    pub end: usize,
    pub value: CellValue,
}

impl MergeRange {
    /// Runs of one row are aligned but not merged.
    pub fn is_merged(&self) -> bool {
        self.end > self.start
    }
}

/// Collapse consecutive equal values into ranges in a single forward pass.
///
/// Separated runs of the same value stay separate.
pub fn merge_ranges<'a, I>(values: I) -> Vec<MergeRange>
where
    I: IntoIterator<Item = &'a CellValue>,
{
    let mut ranges: Vec<MergeRange> = Vec::new();
    for (row, value) in values.into_iter().enumerate() {
        match ranges.last_mut() {
            Some(last) if last.value == *value => last.end = row,
            _ => ranges.push(MergeRange {
                start: row,
                end: row,
                value: value.clone(),
            }),
        }
    }
    ranges
}

/// Width in character units; every non-ASCII character counts as two.
pub fn display_width(text: &str) -> usize {
    text.chars().map(|ch| if ch.is_ascii() { 1 } else { 2 }).sum()
}

/// Width for each output column.
///
/// The reference and quantity columns are fixed; every other column is
/// `min(widest value + 2, 100)` over its header and cells.
pub fn column_widths(table: &ProjectedTable) -> Vec<f64> {
    table
        .headers
        .iter()
        .enumerate()
        .map(|(idx, header)| match header.as_str() {
            REFERENCE_COLUMN => REFERENCE_WIDTH,
            QUANTITY_COLUMN => QUANTITY_WIDTH,
            _ => {
                let widest = table
                    .column(idx)
                    .map(|cell| display_width(&cell.display_text()))
                    .chain(std::iter::once(display_width(header)))
                    .max()
                    .unwrap_or(0);
                (widest + WIDTH_PADDING).min(MAX_WIDTH) as f64
            }
        })
        .collect()
}

/// Sheet-level presentation settings.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    pub sheet_name: String,
    pub font_name: String,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            sheet_name: "BOM".to_string(),
            font_name: "等线".to_string(),
        }
    }
}
