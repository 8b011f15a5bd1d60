//! Integration tests for the text report and the layout planner.

use chrono::NaiveDate;
use insta::assert_snapshot;
use proptest::prelude::*;

use bom_model::{BomConfig, CellValue, Issue, IssueKind, IssueLedger};
use bom_report::{ReportHeader, merge_ranges, render_report};

fn header(row_count: usize) -> ReportHeader {
    ReportHeader {
        project: "demo".to_string(),
        generated_at: NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap(),
        input_path: "boards/demo.csv".to_string(),
        encoding: "utf-8".to_string(),
        row_count,
    }
}

#[test]
fn report_with_issues() {
    let mut ledger = IssueLedger::new();
    ledger.push(Issue::new(IssueKind::InvalidQty, "数量格式无效: two").with_row("R3", "two", ""));
    ledger.push(
        Issue::new(IssueKind::MissingCategory, "分类字段为空")
            .with_row("R1", "10k Resistor", "10K"),
    );
    ledger.push(
        Issue::new(
            IssueKind::ValueNotInDescription,
            "Value值未包含在描述中（忽略大小写和空格的比对）",
        )
        .with_row("C1", "Cap 100nF", "5V"),
    );
    ledger.push(Issue::new(IssueKind::MissingCategory, "分类字段为空").with_row("R2", "", ""));

    let report = render_report(&header(3), &ledger, &BomConfig::default());
    assert_snapshot!(report, @r"
    BOM 转换质量报告
    ================================================================================

    项目名称: demo
    生成时间: 2024-05-01 09:30:00
    输入文件: boards/demo.csv
    输入编码: utf-8
    总行数: 3

    问题统计
    --------------------------------------------------------------------------------
      MissingCategory: 2
      InvalidQty: 1
      ValueNotInDescription: 1

    错误详情
    ================================================================================

    [数量格式错误] 位号: R3
      详情: 数量格式无效: two
      描述: two

    [分类为空] 位号: R1
      详情: 分类字段为空
      描述: 10k Resistor
      Value: 10K

    [Value未包含在描述中] 位号: C1
      详情: Value值未包含在描述中（忽略大小写和空格的比对）
      描述: Cap 100nF
      Value: 5V

    [分类为空] 位号: R2
      详情: 分类字段为空
    ");
}

#[test]
fn report_without_issues() {
    let report = render_report(&header(0), &IssueLedger::new(), &BomConfig::default());
    assert!(report.ends_with("总行数: 0\n\n未发现质量问题。\n"));
    assert!(!report.contains("问题统计"));
}

fn kind_strategy() -> impl Strategy<Value = IssueKind> {
    prop::sample::select(IssueKind::ALL.to_vec())
}

fn issue_strategy() -> impl Strategy<Value = Issue> {
    (kind_strategy(), "[A-Z][0-9]{0,2}", "[a-z ]{0,6}", "[0-9a-z]{0,3}").prop_map(
        |(kind, reference, description, value)| {
            Issue::new(kind, "detail").with_row(reference, description, value)
        },
    )
}

proptest! {
    #[test]
    fn detail_blocks_match_summary_counts(
        issues in prop::collection::vec(issue_strategy(), 1..30)
    ) {
        let mut ledger = IssueLedger::new();
        for issue in issues {
            ledger.push(issue);
        }
        let report = render_report(&header(0), &ledger, &BomConfig::default());

        let (summary, details) = report.split_once("错误详情").unwrap();
        let summary_total: usize = summary
            .lines()
            .filter_map(|line| line.strip_prefix("  "))
            .filter_map(|line| line.rsplit_once(": "))
            .filter_map(|(_, count)| count.parse::<usize>().ok())
            .sum();
        let detail_blocks = details.lines().filter(|line| line.starts_with('[')).count();

        prop_assert_eq!(summary_total, ledger.len());
        prop_assert_eq!(detail_blocks, ledger.len());
    }

    #[test]
    fn merge_ranges_tile_the_column(
        labels in prop::collection::vec(prop::sample::select(vec!["A", "B", "C"]), 0..40)
    ) {
        let cells: Vec<CellValue> = labels.iter().map(|l| CellValue::from(*l)).collect();
        let ranges = merge_ranges(&cells);

        let mut next = 0usize;
        for (idx, range) in ranges.iter().enumerate() {
            prop_assert_eq!(range.start, next);
            prop_assert!(range.end >= range.start);
            for row in range.start..=range.end {
                prop_assert_eq!(&cells[row], &range.value);
            }
            if idx > 0 {
                prop_assert_ne!(&ranges[idx - 1].value, &range.value);
            }
            next = range.end + 1;
        }
        prop_assert_eq!(next, cells.len());
    }
}
