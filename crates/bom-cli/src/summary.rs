use std::fmt;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::RunResult;

const QUIET_NOTE: &str = "(详细错误报告已保存到文件，使用 -q 参数已隐藏终端输出)";
const NO_ISSUES: &str = "问题统计：无不合规记录";

pub fn print_summary(result: &RunResult, quiet: bool) {
    print!("{}", render_summary(result, quiet));
}

/// Console summary: artifact paths, then the issue table and details when a
/// report was written.
pub fn render_summary(result: &RunResult, quiet: bool) -> String {
    ConsoleSummary { result, quiet }.to_string()
}

struct ConsoleSummary<'a> {
    result: &'a RunResult,
    quiet: bool,
}

impl fmt::Display for ConsoleSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.result;
        writeln!(f, "输入编码: {}", result.encoding)?;
        writeln!(f, "输出文件: {}", result.output_file.display())?;
        let Some(report_file) = &result.report_file else {
            return Ok(());
        };
        writeln!(f, "报告文件: {}", report_file.display())?;

        if result.ledger.is_empty() {
            return writeln!(f, "{NO_ISSUES}");
        }

        writeln!(f, "\n{}", issue_table(result))?;

        if self.quiet {
            return writeln!(f, "{QUIET_NOTE}");
        }
        writeln!(f, "\n========== 错误报告详情 ==========")?;
        for issue in &result.ledger {
            writeln!(
                f,
                "[{}] {}: {}",
                result.config.issue_label(issue.kind),
                issue.reference,
                issue.detail
            )?;
            if !issue.description.is_empty() {
                writeln!(f, "  描述: {}", issue.description)?;
            }
            if !issue.value.is_empty() {
                writeln!(f, "  Value: {}", issue.value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn issue_table(result: &RunResult) -> Table {
    let summary = result.ledger.summary();
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Issue"),
        header_cell("问题类型"),
        header_cell("Count"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for (kind, count) in &summary.counts {
        table.add_row(vec![
            Cell::new(kind.as_str()),
            Cell::new(result.config.issue_label(*kind)),
            Cell::new(count).fg(Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(summary.total()).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use bom_model::{BomConfig, Issue, IssueKind, IssueLedger};

    fn result(ledger: IssueLedger, report: bool) -> RunResult {
        RunResult {
            project: "PV3".to_string(),
            encoding: "utf-8".to_string(),
            input_rows: 3,
            output_file: PathBuf::from("out/PV3_BOM_20240501.xlsx"),
            report_file: report.then(|| PathBuf::from("out/PV3_BOM_Report_20240501.txt")),
            ledger,
            config: BomConfig::default(),
        }
    }

    fn ledger() -> IssueLedger {
        let mut ledger = IssueLedger::new();
        ledger.push(
            Issue::new(IssueKind::MissingCategory, "分类字段为空").with_row("R1", "10k", "10K"),
        );
        ledger
    }

    #[test]
    fn empty_ledger_prints_no_issue_line() {
        let text = render_summary(&result(IssueLedger::new(), true), false);
        assert!(text.contains("报告文件: out/PV3_BOM_Report_20240501.txt"));
        assert!(text.ends_with("问题统计：无不合规记录\n"));
    }

    #[test]
    fn details_follow_table_unless_quiet() {
        let loud = render_summary(&result(ledger(), true), false);
        assert!(loud.contains("MissingCategory"));
        assert!(loud.contains("[分类为空] R1: 分类字段为空"));
        assert!(loud.contains("  Value: 10K"));

        let quiet = render_summary(&result(ledger(), true), true);
        assert!(quiet.contains("MissingCategory"));
        assert!(!quiet.contains("[分类为空]"));
        assert!(quiet.contains(QUIET_NOTE));
    }

    #[test]
    fn no_report_means_paths_only() {
        let text = render_summary(&result(ledger(), false), false);
        assert_eq!(text.lines().count(), 2);
    }
}
