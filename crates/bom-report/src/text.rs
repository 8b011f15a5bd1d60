//! Plain-text quality report.

use std::fmt;

use chrono::NaiveDateTime;

use bom_model::{BomConfig, IssueLedger};

const TITLE: &str = "BOM 转换质量报告";
const RULE_WIDTH: usize = 80;

/// Run metadata printed at the top of the report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportHeader {
    pub project: String,
    pub generated_at: NaiveDateTime,
    pub input_path: String,
    pub encoding: String,
    pub row_count: usize,
}

/// Render the report: header block, per-kind summary, then one block per
/// issue in ledger order. An empty ledger yields a single "no issues" line
/// after the header.
pub fn render_report(header: &ReportHeader, ledger: &IssueLedger, config: &BomConfig) -> String {
    QualityReport {
        header,
        ledger,
        config,
    }
    .to_string()
}

struct QualityReport<'a> {
    header: &'a ReportHeader,
    ledger: &'a IssueLedger,
    config: &'a BomConfig,
}

impl fmt::Display for QualityReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);
        let header = self.header;

        writeln!(f, "{TITLE}")?;
        writeln!(f, "{heavy}\n")?;
        writeln!(f, "项目名称: {}", header.project)?;
        writeln!(f, "生成时间: {}", header.generated_at.format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(f, "输入文件: {}", header.input_path)?;
        writeln!(f, "输入编码: {}", header.encoding)?;
        writeln!(f, "总行数: {}\n", header.row_count)?;

        if self.ledger.is_empty() {
            return writeln!(f, "未发现质量问题。");
        }

        writeln!(f, "问题统计")?;
        writeln!(f, "{light}")?;
        for (kind, count) in &self.ledger.summary().counts {
            writeln!(f, "  {kind}: {count}")?;
        }
        writeln!(f)?;

        writeln!(f, "错误详情")?;
        writeln!(f, "{heavy}\n")?;
        for issue in self.ledger {
            writeln!(f, "[{}] 位号: {}", self.config.issue_label(issue.kind), issue.reference)?;
            writeln!(f, "  详情: {}", issue.detail)?;
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
