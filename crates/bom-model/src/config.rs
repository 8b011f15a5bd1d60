//! Run configuration with built-in defaults.
//!
//! A [`BomConfig`] is built once per run (defaults, then an optional user
//! overlay applied by the loader in `bom-ingest`) and is read-only afterwards.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::columns;
use crate::issue::IssueKind;

/// One output column: display name and the internal column it is taken from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputColumn {
    pub display: String,
    pub source: String,
}

impl OutputColumn {
    pub fn new(display: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            display: display.into(),
            source: source.into(),
        }
    }
}

/// Spreadsheet artifact format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExportFormat {
    #[default]
    Xlsx,
    /// UTF-8 CSV with a byte-order mark.
    Csv,
}

impl ExportFormat {
    /// `xlsx` (any case) selects the spreadsheet; every other value selects CSV.
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("xlsx") {
            Self::Xlsx
        } else {
            Self::Csv
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Csv => "csv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Quality report format. Only plain text is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReportFormat {
    #[default]
    Txt,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BomOptions {
    /// Run the case/whitespace-insensitive description/value check.
    pub ignore_case_whitespace_for_value_match: bool,
    pub generate_report: bool,
    pub report_format: ReportFormat,
    pub export_format: ExportFormat,
    /// Sort keys, most significant first.
    pub sort_by: Vec<String>,
}

impl Default for BomOptions {
    fn default() -> Self {
        Self {
            ignore_case_whitespace_for_value_match: true,
            generate_report: true,
            report_format: ReportFormat::Txt,
            export_format: ExportFormat::Xlsx,
            sort_by: vec![
                columns::CATEGORY_LABEL.to_string(),
                columns::REFERENCE.to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BomConfig {
    pub required_columns: Vec<String>,
    /// Output schema; iteration order is the output column order.
    pub output_columns: Vec<OutputColumn>,
    /// Top-level category segment to display label.
    pub category_map: BTreeMap<String, String>,
    pub unknown_label: String,
    /// Localized label per issue kind.
    pub issue_labels: BTreeMap<IssueKind, String>,
    pub options: BomOptions,
}

impl Default for BomConfig {
    fn default() -> Self {
        let output_columns = [
            ("", columns::CATEGORY_DISPLAY),
            ("规格和型号", columns::DESCRIPTION),
            ("位号", columns::REFERENCE),
            ("数量", columns::QUANTITY),
            ("料号", columns::PART_NUMBER),
            ("制造商", columns::MANUFACTURER),
            ("制造商料号", columns::MANUFACTURER_PART_NUMBER),
            ("LCSC 料号", columns::DISTRIBUTOR_PART_NUMBER),
        ]
        .into_iter()
        .map(|(display, source)| OutputColumn::new(display, source))
        .collect();

        let category_map = [
            ("Audio", "音频器件"),
            ("Capacitor", "电容"),
            ("Connector", "连接器"),
            ("Crystal", "晶振"),
            ("Diode", "二极管"),
            ("Fuse", "保险丝"),
            ("IC", "芯片"),
            ("Inductor", "电感"),
            ("Non-BOM", "非物料"),
            ("PCB", "PCB板"),
            ("Resistor", "电阻"),
            ("Switch", "开关"),
            ("Transistor", "晶体管"),
        ]
        .into_iter()
        .map(|(top, label)| (top.to_string(), label.to_string()))
        .collect();

        let issue_labels = [
            (IssueKind::MissingColumn, "缺失必需列"),
            (IssueKind::EmptyDescription, "描述为空"),
            (IssueKind::ValueNotInDescription, "Value未包含在描述中"),
            (IssueKind::MissingCategory, "分类为空"),
            (IssueKind::InvalidQty, "数量格式错误"),
        ]
        .into_iter()
        .map(|(kind, label)| (kind, label.to_string()))
        .collect();

        Self {
            required_columns: columns::REQUIRED.iter().map(ToString::to_string).collect(),
            output_columns,
            category_map,
            unknown_label: "Unknown".to_string(),
            issue_labels,
            options: BomOptions::default(),
        }
    }
}

impl BomConfig {
    /// Localized label for an issue kind, falling back to the kind name.
    pub fn issue_label(&self, kind: IssueKind) -> &str {
        self.issue_labels
            .get(&kind)
            .map_or(kind.as_str(), String::as_str)
    }

    /// Set the source of an output column.
    ///
    /// An existing display name keeps its position; a new one is appended.
    pub fn upsert_output_column(&mut self, display: &str, source: &str) {
        match self
            .output_columns
            .iter_mut()
            .find(|column| column.display == display)
        {
            Some(column) => column.source = source.to_string(),
            None => self
                .output_columns
                .push(OutputColumn::new(display, source)),
        }
    }
}
