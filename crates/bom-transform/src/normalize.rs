//! Field normalization: whitespace trimming and quantity coercion.

use bom_model::{BomTable, CellValue, Issue, IssueKind, IssueLedger, columns};

/// Trim every text cell in place. Cells that trim to nothing become
/// [`CellValue::Empty`], except in the quantity column, where they stay as
/// empty text so quantity coercion still flags them.
///
/// Returns the number of cells that changed.
pub fn trim_text_cells(table: &mut BomTable) -> usize {
    let qty_idx = table.column_index(columns::QUANTITY);
    let mut changed = 0usize;
    for row in table.rows_mut() {
        for (col, cell) in row.iter_mut().enumerate() {
            let CellValue::Text(text) = cell else {
                continue;
            };
            let trimmed = text.trim();
            if trimmed.len() == text.len() {
                continue;
            }
            *cell = if Some(col) == qty_idx {
                CellValue::Text(trimmed.to_string())
            } else {
                CellValue::from(trimmed)
            };
            changed += 1;
        }
    }
    changed
}

/// Read a quantity as a float and truncate it to an integer.
///
/// Non-numeric, non-finite and out-of-range values yield `None`.
pub fn parse_quantity(raw: &str) -> Option<i64> {
    let value: f64 = raw.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    let truncated = value.trunc();
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return None;
    }
    Some(truncated as i64)
}

/// Coerce the quantity column to integers.
///
/// Unparseable values are left untouched and recorded as `InvalidQty`, with
/// the raw value in the issue's description. Missing quantities are not
/// issues, but whitespace-only ones are. Returns the number of invalid quantities.
pub fn normalize_quantities(table: &mut BomTable, ledger: &mut IssueLedger) -> usize {
    let Some(qty_idx) = table.column_index(columns::QUANTITY) else {
        return 0;
    };
    let ref_idx = table.column_index(columns::REFERENCE);
    let mut invalid = 0usize;
    for row in table.rows_mut() {
        let CellValue::Text(raw) = &row[qty_idx] else {
            continue;
        };
        match parse_quantity(raw) {
            Some(quantity) => row[qty_idx] = CellValue::Integer(quantity),
            None => {
                invalid += 1;
                let reference = ref_idx
                    .map(|idx| row[idx].display_text())
                    .unwrap_or_default();
                ledger.push(
                    Issue::new(IssueKind::InvalidQty, format!("数量格式无效: {raw}"))
                        .with_row(reference, raw.clone(), ""),
                );
            }
        }
    }
    invalid
}

/// Trim text cells, then coerce quantities.
pub fn normalize_fields(table: &mut BomTable, ledger: &mut IssueLedger) {
    let trimmed = trim_text_cells(table);
    let invalid = normalize_quantities(table, ledger);
    tracing::info!(
        trimmed_cells = trimmed,
        invalid_quantities = invalid,
        "fields normalized"
    );
}
