//! Property tests for the consistency checker.

use proptest::prelude::*;

use bom_model::{BomOptions, BomTable, CellValue, IssueKind, IssueLedger};
use bom_validate::{normalize_for_match, run_consistency_checks};

fn text_strategy() -> impl Strategy<Value = String> {
    "[ \tabcAB1k0nFu]{0,8}"
}

fn build(rows: &[(String, String)]) -> BomTable {
    let headers = vec!["Reference".to_string(), "描述".to_string(), "Value".to_string()];
    let rows = rows
        .iter()
        .enumerate()
        .map(|(idx, (desc, value))| {
            vec![
                CellValue::from(format!("R{idx}")),
                CellValue::from(desc.as_str()),
                CellValue::from(value.as_str()),
            ]
        })
        .collect();
    BomTable::new(headers, rows).unwrap()
}

proptest! {
    #[test]
    fn value_mismatch_iff_not_contained(
        rows in prop::collection::vec((text_strategy(), text_strategy()), 0..12)
    ) {
        let table = build(&rows);
        let mut ledger = IssueLedger::new();
        run_consistency_checks(&table, &BomOptions::default(), &mut ledger);

        for (idx, (desc, value)) in rows.iter().enumerate() {
            let reference = format!("R{idx}");
            let flagged = ledger.iter().any(|issue| {
                issue.kind == IssueKind::ValueNotInDescription && issue.reference == reference
            });
            let norm_value = normalize_for_match(value);
            let expected =
                !norm_value.is_empty() && !normalize_for_match(desc).contains(&norm_value);
            prop_assert_eq!(flagged, expected);
        }
    }

    #[test]
    fn checks_never_touch_rows(
        rows in prop::collection::vec((text_strategy(), text_strategy()), 0..12)
    ) {
        let table = build(&rows);
        let before = table.clone();
        let mut ledger = IssueLedger::new();
        run_consistency_checks(&table, &BomOptions::default(), &mut ledger);
        prop_assert_eq!(table, before);
    }

    #[test]
    fn normalization_is_idempotent(text in text_strategy()) {
        let once = normalize_for_match(&text);
        prop_assert_eq!(normalize_for_match(&once), once.clone());
        prop_assert!(!once.chars().any(char::is_whitespace));
    }
}

#[test]
fn documented_examples() {
    let rows = vec![
        ("10k Resistor  ".to_string(), "10K".to_string()),
        ("Cap 100nF".to_string(), "1uF".to_string()),
    ];
    let table = build(&rows);
    let mut ledger = IssueLedger::new();
    run_consistency_checks(&table, &BomOptions::default(), &mut ledger);
    let flagged: Vec<&str> = ledger
        .iter()
        .filter(|issue| issue.kind == IssueKind::ValueNotInDescription)
        .map(|issue| issue.reference.as_str())
        .collect();
    assert_eq!(flagged, vec!["R1"]);
}
