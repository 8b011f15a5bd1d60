//! Category classification.

use std::collections::BTreeMap;

use bom_model::{BomConfig, BomTable, CellValue, TableError, columns};

/// Trimmed text before the first `/`, or the whole trimmed string.
pub fn top_level_segment(raw: &str) -> &str {
    raw.split_once('/').map_or(raw, |(top, _)| top).trim()
}

/// Map a raw hierarchical category to its display label.
///
/// Looks the top-level segment up exactly, then with its first letter
/// capitalized and the rest lowercased. Blank, missing and unmatched
/// categories map to `unknown_label`.
pub fn classify(
    raw: Option<&str>,
    lookup: &BTreeMap<String, String>,
    unknown_label: &str,
) -> String {
    let Some(raw) = raw.filter(|text| !text.trim().is_empty()) else {
        return unknown_label.to_string();
    };
    let top = top_level_segment(raw);
    lookup
        .get(top)
        .or_else(|| lookup.get(&capitalize(top)))
        .cloned()
        .unwrap_or_else(|| unknown_label.to_string())
}

/// [`classify`] over a cell; only text cells are classified.
pub fn classify_cell(
    cell: &CellValue,
    lookup: &BTreeMap<String, String>,
    unknown_label: &str,
) -> String {
    classify(cell.as_text(), lookup, unknown_label)
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Add the label and top-level segment columns.
///
/// Without a category column every row gets the unknown label and an empty
/// top-level segment.
pub fn add_category_columns(table: &mut BomTable, config: &BomConfig) -> Result<(), TableError> {
    let (labels, tops): (Vec<CellValue>, Vec<CellValue>) =
        match table.column_values(columns::CATEGORY) {
            Some(values) => values
                .map(|cell| {
                    let label = classify_cell(cell, &config.category_map, &config.unknown_label);
                    (CellValue::Text(label), top_segment_cell(cell))
                })
                .unzip(),
            None => (
                vec![CellValue::Text(config.unknown_label.clone()); table.len()],
                vec![CellValue::Empty; table.len()],
            ),
        };
    table.set_column(columns::CATEGORY_LABEL, labels)?;
    table.set_column(columns::CATEGORY_TOP, tops)?;
    Ok(())
}

fn top_segment_cell(cell: &CellValue) -> CellValue {
    match cell.as_text() {
        Some(text) if !text.trim().is_empty() => CellValue::from(top_level_segment(text)),
        _ => CellValue::Empty,
    }
}
