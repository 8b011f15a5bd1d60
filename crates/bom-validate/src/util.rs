use bom_model::{BomTable, Issue, IssueKind, columns};

/// Build an issue carrying the reference, description and value of `row`.
///
/// Columns absent from the table contribute empty strings.
pub fn row_issue(
    table: &BomTable,
    row: usize,
    kind: IssueKind,
    detail: impl Into<String>,
) -> Issue {
    Issue::new(kind, detail).with_row(
        table.cell_text(row, columns::REFERENCE),
        table.cell_text(row, columns::DESCRIPTION),
        table.cell_text(row, columns::VALUE),
    )
}
