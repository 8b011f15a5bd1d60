//! End-to-end tests for the standard transform pipeline.

use proptest::prelude::*;

use bom_model::{BomConfig, BomTable, CellValue, IssueKind, columns};
use bom_transform::transform;

/// One input row: (reference, category, description, value, qty).
type Row<'a> = (&'a str, &'a str, &'a str, &'a str, &'a str);

fn build(rows: &[Row<'_>]) -> BomTable {
    let headers: Vec<String> = columns::REQUIRED.iter().map(|c| c.to_string()).collect();
    let rows = rows
        .iter()
        .map(|(reference, category, description, value, qty)| {
            headers
                .iter()
                .map(|header| {
                    let raw = match header.as_str() {
                        columns::REFERENCE => *reference,
                        columns::CATEGORY => *category,
                        columns::DESCRIPTION => *description,
                        columns::VALUE => *value,
                        columns::QUANTITY => *qty,
                        _ => "x",
                    };
                    CellValue::from_raw(raw)
                })
                .collect()
        })
        .collect();
    BomTable::new(headers, rows).unwrap()
}

fn references(output: &bom_transform::TransformOutput) -> Vec<String> {
    let idx = output.projected.column_index("位号").unwrap();
    output
        .projected
        .column(idx)
        .map(CellValue::display_text)
        .collect()
}

#[test]
fn three_row_scenario() {
    let table = build(&[
        ("R1", "", "10k Resistor", "10K", "1"),
        ("C1", "Capacitor/Ceramic", "Cap 100nF", "5V", "2"),
        ("R2", "Resistor/0402", "4.7k 0402", "4.7k", "1"),
    ]);
    let config = BomConfig::default();
    let output = transform(table, &config).unwrap();

    assert_eq!(output.input_rows, 3);
    assert_eq!(output.projected.len(), 3);
    // "Unknown" sorts before the CJK labels; 电容 before 电阻
    assert_eq!(references(&output), vec!["R1", "C1", "R2"]);

    let summary = output.ledger.summary();
    assert_eq!(summary.count_for(IssueKind::MissingCategory), 1);
    assert_eq!(summary.count_for(IssueKind::ValueNotInDescription), 1);
    assert_eq!(summary.total(), 2);

    let mismatch = output
        .ledger
        .iter()
        .find(|issue| issue.kind == IssueKind::ValueNotInDescription)
        .unwrap();
    assert_eq!(mismatch.reference, "C1");
    assert_eq!(mismatch.value, "5V");
}

#[test]
fn projected_schema_follows_output_columns() {
    let table = build(&[("C1", "Capacitor/Ceramic", "Cap 100nF", "100nF", "2.0")]);
    let config = BomConfig::default();
    let output = transform(table, &config).unwrap();

    let headers: Vec<&str> = config
        .output_columns
        .iter()
        .map(|column| column.display.as_str())
        .collect();
    assert_eq!(output.projected.headers, headers);

    let row = &output.projected.rows[0];
    assert_eq!(row[0], CellValue::from("电容"));
    assert_eq!(row[3], CellValue::Integer(2));
    assert!(output.ledger.is_empty());
}

#[test]
fn missing_columns_are_recorded_and_filled() {
    let table = BomTable::new(
        vec!["Reference".to_string(), "Qty".to_string()],
        vec![vec![CellValue::from("R1"), CellValue::from("abc")]],
    )
    .unwrap();
    let config = BomConfig::default();
    let output = transform(table, &config).unwrap();

    assert_eq!(output.ledger.count(IssueKind::MissingColumn), 8);
    assert_eq!(output.ledger.count(IssueKind::InvalidQty), 1);
    assert_eq!(output.ledger.count(IssueKind::MissingCategory), 0);
    assert_eq!(output.projected.len(), 1);
    let row = &output.projected.rows[0];
    assert_eq!(row[0], CellValue::from("Unknown"));
    assert_eq!(row[1], CellValue::Text(String::new()));
    assert_eq!(row[3], CellValue::from("abc"));
}

#[test]
fn whitespace_quantity_is_flagged_but_empty_is_not() {
    let table = build(&[
        ("R1", "Resistor", "10k", "10k", "   "),
        ("R2", "Resistor", "10k", "10k", ""),
    ]);
    let output = transform(table, &BomConfig::default()).unwrap();

    assert_eq!(output.ledger.count(IssueKind::InvalidQty), 1);
    let issue = &output.ledger.issues()[0];
    assert_eq!(issue.kind, IssueKind::InvalidQty);
    assert_eq!(issue.reference, "R1");
    assert_eq!(output.projected.len(), 2);
}

#[test]
fn disabled_value_match_skips_description_checks() {
    let table = build(&[("C1", "Capacitor", "", "5V", "1")]);
    let mut config = BomConfig::default();
    config.options.ignore_case_whitespace_for_value_match = false;
    let output = transform(table, &config).unwrap();
    assert!(output.ledger.is_empty());
}

#[test]
fn empty_input_yields_empty_output() {
    let output = transform(build(&[]), &BomConfig::default()).unwrap();
    assert!(output.projected.is_empty());
    assert!(output.ledger.is_empty());
}

fn row_strategy() -> impl Strategy<Value = (String, String, String)> {
    (
        "[A-Z][0-9]{1,3}",
        prop::sample::select(vec!["", "Resistor/0402", "Capacitor", "ic/mcu", "Relay"]),
        "[0-9a-z. ]{0,4}",
    )
        .prop_map(|(reference, category, qty)| (reference, category.to_string(), qty))
}

proptest! {
    #[test]
    fn every_row_survives(rows in prop::collection::vec(row_strategy(), 0..20)) {
        let input: Vec<Row<'_>> = rows
            .iter()
            .map(|(reference, category, qty)| {
                (reference.as_str(), category.as_str(), "desc", "", qty.as_str())
            })
            .collect();
        let output = transform(build(&input), &BomConfig::default()).unwrap();

        let mut expected: Vec<String> = rows.iter().map(|(r, _, _)| r.clone()).collect();
        let mut actual = references(&output);
        expected.sort();
        actual.sort();
        prop_assert_eq!(actual, expected);
        prop_assert_eq!(output.input_rows, rows.len());
    }

    #[test]
    fn transform_is_deterministic(rows in prop::collection::vec(row_strategy(), 0..20)) {
        let input: Vec<Row<'_>> = rows
            .iter()
            .map(|(reference, category, qty)| {
                (reference.as_str(), category.as_str(), "desc", "", qty.as_str())
            })
            .collect();
        let config = BomConfig::default();
        let first = transform(build(&input), &config).unwrap();
        let second = transform(build(&input), &config).unwrap();
        prop_assert_eq!(first.projected, second.projected);
        prop_assert_eq!(first.ledger, second.ledger);
    }

    #[test]
    fn output_is_grouped_by_label(rows in prop::collection::vec(row_strategy(), 0..20)) {
        let input: Vec<Row<'_>> = rows
            .iter()
            .map(|(reference, category, qty)| {
                (reference.as_str(), category.as_str(), "desc", "", qty.as_str())
            })
            .collect();
        let output = transform(build(&input), &BomConfig::default()).unwrap();
        let labels: Vec<String> = output.projected.column(0).map(CellValue::display_text).collect();
        let mut sorted = labels.clone();
        sorted.sort();
        prop_assert_eq!(labels, sorted);
    }
}
