//! Required-column presence.

use bom_model::{BomTable, Issue, IssueKind, IssueLedger};

/// Record one `MissingColumn` issue per required column absent from `table`.
///
/// Returns the number of missing columns.
pub fn check_required_columns(
    table: &BomTable,
    required: &[String],
    ledger: &mut IssueLedger,
) -> usize {
    let mut missing = 0usize;
    for column in required {
        if table.has_column(column) {
            continue;
        }
        missing += 1;
        tracing::warn!(column = %column, "required column missing");
        ledger.push(Issue::new(
            IssueKind::MissingColumn,
            format!("缺失必需列: {column}"),
        ));
    }
    missing
}
