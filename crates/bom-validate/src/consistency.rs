//! Description/value consistency and category presence.

use bom_model::{BomOptions, BomTable, IssueKind, IssueLedger, columns};

use crate::util::row_issue;

const DETAIL_MISSING_CATEGORY: &str = "分类字段为空";
const DETAIL_EMPTY_DESCRIPTION: &str = "描述字段为空";
const DETAIL_VALUE_NOT_IN_DESCRIPTION: &str = "Value值未包含在描述中（忽略大小写和空格的比对）";

/// Uppercase with every whitespace character removed.
pub fn normalize_for_match(text: &str) -> String {
    text.chars()
        .filter(|ch| !ch.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// True when the normalized value is empty or occurs in the normalized
/// description.
pub fn value_in_description(description: &str, value: &str) -> bool {
    let value = normalize_for_match(value);
    value.is_empty() || normalize_for_match(description).contains(&value)
}

/// One `MissingCategory` issue per row whose category is blank.
///
/// No-op when the table has no category column.
pub fn check_missing_categories(table: &BomTable, ledger: &mut IssueLedger) -> usize {
    let Some(values) = table.column_values(columns::CATEGORY) else {
        return 0;
    };
    let blank_rows: Vec<usize> = values
        .enumerate()
        .filter(|(_, value)| value.is_blank())
        .map(|(row, _)| row)
        .collect();
    for &row in &blank_rows {
        ledger.push(row_issue(
            table,
            row,
            IssueKind::MissingCategory,
            DETAIL_MISSING_CATEGORY,
        ));
    }
    blank_rows.len()
}

/// Empty-description and value-containment checks.
///
/// All `EmptyDescription` issues are recorded first, then all
/// `ValueNotInDescription` issues, each in row order. No-op unless both the
/// description and the value column exist.
pub fn check_descriptions(table: &BomTable, ledger: &mut IssueLedger) -> usize {
    let (Some(desc_idx), Some(value_idx)) = (
        table.column_index(columns::DESCRIPTION),
        table.column_index(columns::VALUE),
    ) else {
        tracing::debug!("description or value column absent, skipping value match");
        return 0;
    };
    let before = ledger.len();

    for (row, cells) in table.rows().iter().enumerate() {
        if cells[desc_idx].is_blank() {
            ledger.push(row_issue(
                table,
                row,
                IssueKind::EmptyDescription,
                DETAIL_EMPTY_DESCRIPTION,
            ));
        }
    }
    for (row, cells) in table.rows().iter().enumerate() {
        let description = cells[desc_idx].display_text();
        let value = cells[value_idx].display_text();
        if !value_in_description(&description, &value) {
            ledger.push(row_issue(
                table,
                row,
                IssueKind::ValueNotInDescription,
                DETAIL_VALUE_NOT_IN_DESCRIPTION,
            ));
        }
    }
    ledger.len() - before
}

/// Runs the category check, then the description checks when value matching
/// is enabled.
pub fn run_consistency_checks(table: &BomTable, options: &BomOptions, ledger: &mut IssueLedger) {
    let categories = check_missing_categories(table, ledger);
    let descriptions = if options.ignore_case_whitespace_for_value_match {
        check_descriptions(table, ledger)
    } else {
        tracing::debug!("value match disabled");
        0
    };
    tracing::info!(
        missing_categories = categories,
        description_issues = descriptions,
        "consistency checks complete"
    );
}
