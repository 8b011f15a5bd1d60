//! Multi-key row sorting and projection onto the output schema.

use std::cmp::Ordering;

use bom_model::{BomTable, CellValue, OutputColumn, ProjectedTable, TableError, columns};

/// Column indices for `keys`, in key order.
///
/// A key that is not a column of the table is dropped on its own; the keys
/// after it still apply.
pub fn resolve_sort_keys(table: &BomTable, keys: &[String]) -> Vec<usize> {
    keys.iter()
        .filter_map(|key| {
            let idx = table.column_index(key);
            if idx.is_none() {
                tracing::warn!(key = %key, "sort key is not a column, skipping it");
            }
            idx
        })
        .collect()
}

/// Stable sort by `keys`, most significant first. Blank values sort last
/// for every key; ties keep their pre-sort order.
pub fn sort_rows(table: &mut BomTable, keys: &[String]) {
    let key_idx = resolve_sort_keys(table, keys);
    if key_idx.is_empty() {
        return;
    }
    let rows = table.rows();
    let mut order: Vec<usize> = (0..rows.len()).collect();
    order.sort_by(|&a, &b| {
        key_idx
            .iter()
            .map(|&col| rows[a][col].sort_cmp(&rows[b][col]))
            .find(|ordering| *ordering != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    });
    table.reorder(&order);
}

/// Copy the classification label into the display column.
///
/// Must run after sorting so display grouping follows post-sort adjacency.
pub fn add_display_column(table: &mut BomTable) -> Result<(), TableError> {
    let labels: Vec<CellValue> = match table.column_values(columns::CATEGORY_LABEL) {
        Some(values) => values.cloned().collect(),
        None => vec![CellValue::Empty; table.len()],
    };
    table.set_column(columns::CATEGORY_DISPLAY, labels)
}

/// Project the table onto `output_columns`, in mapping order.
///
/// An output column whose source is absent is filled with empty strings.
pub fn project(table: &BomTable, output_columns: &[OutputColumn]) -> ProjectedTable {
    let sources: Vec<Option<usize>> = output_columns
        .iter()
        .map(|column| {
            let idx = table.column_index(&column.source);
            if idx.is_none() {
                tracing::debug!(
                    display = %column.display,
                    source = %column.source,
                    "output source column absent, filling with empty strings"
                );
            }
            idx
        })
        .collect();
    let rows = table
        .rows()
        .iter()
        .map(|row| {
            sources
                .iter()
                .map(|source| match source {
                    Some(idx) => row[*idx].clone(),
                    None => CellValue::Text(String::new()),
                })
                .collect()
        })
        .collect();
    ProjectedTable {
        headers: output_columns
            .iter()
            .map(|column| column.display.clone())
            .collect(),
        rows,
    }
}
