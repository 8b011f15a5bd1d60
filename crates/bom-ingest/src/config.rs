//! Layered configuration loading.
//!
//! The optional YAML document is an overlay on [`BomConfig::default`]:
//! mapping-valued keys merge entry by entry, every other key replaces the
//! default wholesale. Problems with the document never abort a run; they are
//! logged and the built-in defaults are used.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use bom_model::{BomConfig, ExportFormat, IssueKind, ReportFormat};

use crate::error::ConfigError;

#[derive(Debug, Default, Deserialize)]
struct ConfigOverlay {
    required_columns: Option<Vec<String>>,
    output_columns: Option<Mapping>,
    category_map: Option<BTreeMap<String, String>>,
    unknown_label: Option<String>,
    issue_type_cn: Option<BTreeMap<String, String>>,
    options: Option<OptionsOverlay>,
}

#[derive(Debug, Default, Deserialize)]
struct OptionsOverlay {
    ignore_case_whitespace_for_value_match: Option<bool>,
    generate_report: Option<bool>,
    report_format: Option<String>,
    export_format: Option<String>,
    sort_by: Option<Vec<String>>,
}

/// Loads the effective configuration for a run.
///
/// `None` yields the defaults. A missing, unreadable or malformed document
/// logs a warning and also yields the defaults.
pub fn load_config(path: Option<&Path>) -> BomConfig {
    let Some(path) = path else {
        return BomConfig::default();
    };
    match try_load_config(path) {
        Ok(config) => {
            tracing::info!(path = %path.display(), "loaded mapping config");
            config
        }
        Err(error) => {
            tracing::warn!(
                path = %path.display(),
                %error,
                "failed to load mapping config, using defaults"
            );
            BomConfig::default()
        }
    }
}

/// Loads a configuration document, reporting every problem.
pub fn try_load_config(path: &Path) -> Result<BomConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut config = BomConfig::default();
    apply_overlay(&mut config, &text)?;
    Ok(config)
}

/// Applies a YAML overlay to `config`.
///
/// On error `config` is left unchanged.
pub fn apply_overlay(config: &mut BomConfig, yaml: &str) -> Result<(), ConfigError> {
    if yaml.trim().is_empty() {
        return Ok(());
    }
    let overlay: Option<ConfigOverlay> = serde_yaml::from_str(yaml)?;
    let Some(overlay) = overlay else {
        return Ok(());
    };
    let mut merged = config.clone();

    if let Some(required) = overlay.required_columns {
        merged.required_columns = required;
    }
    if let Some(columns) = overlay.output_columns {
        for (display, source) in columns {
            let display = mapping_string("output_columns", &display)?;
            let source = mapping_string("output_columns", &source)?;
            merged.upsert_output_column(&display, &source);
        }
    }
    if let Some(categories) = overlay.category_map {
        merged.category_map.extend(categories);
    }
    if let Some(label) = overlay.unknown_label {
        merged.unknown_label = label;
    }
    if let Some(labels) = overlay.issue_type_cn {
        for (kind, label) in labels {
            match kind.parse::<IssueKind>() {
                Ok(kind) => {
                    merged.issue_labels.insert(kind, label);
                }
                Err(error) => tracing::warn!(%error, "ignoring issue label override"),
            }
        }
    }
    if let Some(options) = overlay.options {
        apply_options(&mut merged, options);
    }

    *config = merged;
    Ok(())
}

fn apply_options(config: &mut BomConfig, options: OptionsOverlay) {
    let target = &mut config.options;
    if let Some(enabled) = options.ignore_case_whitespace_for_value_match {
        target.ignore_case_whitespace_for_value_match = enabled;
    }
    if let Some(enabled) = options.generate_report {
        target.generate_report = enabled;
    }
    if let Some(format) = options.report_format {
        if !format.trim().eq_ignore_ascii_case("txt") {
            tracing::warn!(format = %format, "unsupported report format, using txt");
        }
        target.report_format = ReportFormat::Txt;
    }
    if let Some(format) = options.export_format {
        target.export_format = ExportFormat::from_label(&format);
    }
    if let Some(keys) = options.sort_by {
        target.sort_by = keys;
    }
}

fn mapping_string(key: &str, value: &Value) -> Result<String, ConfigError> {
    match value {
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(number.to_string()),
        other => Err(ConfigError::InvalidOverride {
            key: key.to_string(),
            reason: format!("expected a string, found {other:?}"),
        }),
    }
}
