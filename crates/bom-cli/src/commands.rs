use std::path::{Path, PathBuf};

use chrono::Local;
use comfy_table::Table;
use tracing::{info, info_span};

use bom_ingest::{ConfigError, read_bom_file, try_load_config};
use bom_model::{BomConfig, ExportFormat};
use bom_report::{ReportHeader, SheetLayout, render_report, write_csv, write_report, write_xlsx};
use bom_transform::transform;

use crate::error::RunError;
use crate::summary::{apply_table_style, print_summary};
use crate::types::{RunOptions, RunResult};

/// Print the effective category lookup.
pub fn run_categories(mapping: Option<&Path>) -> anyhow::Result<()> {
    let config = load_mapping(mapping);
    let mut table = Table::new();
    table.set_header(vec!["Category", "Label"]);
    apply_table_style(&mut table);
    for (top, label) in &config.category_map {
        table.add_row(vec![top.as_str(), label.as_str()]);
    }
    table.add_row(vec!["(other)", config.unknown_label.as_str()]);
    println!("{table}");
    Ok(())
}

/// Transform one BOM file and write its artifacts.
pub fn run(options: &RunOptions) -> Result<RunResult, RunError> {
    let project = project_name(options);
    let span = info_span!("run", project = %project);
    let _guard = span.enter();

    let config = load_mapping(options.mapping.as_deref());

    if !options.input.is_file() {
        return Err(RunError::InputMissing {
            path: options.input.clone(),
        });
    }
    let loaded = read_bom_file(&options.input, options.encoding.as_deref())
        .map_err(|error| RunError::from_ingest(options.input.clone(), error))?;
    let input_rows = loaded.table.len();

    let output = transform(loaded.table, &config)?;

    std::fs::create_dir_all(&options.output_dir).map_err(|source| RunError::OutputDir {
        path: options.output_dir.clone(),
        source,
    })?;

    let now = Local::now();
    let date_tag = now.format("%Y%m%d").to_string();

    let output_file = spreadsheet_path(&options.output_dir, &project, &date_tag, &config);
    match config.options.export_format {
        ExportFormat::Xlsx => write_xlsx(&output_file, &output.projected, &SheetLayout::default())?,
        ExportFormat::Csv => write_csv(&output_file, &output.projected)?,
    }

    let report_file = if config.options.generate_report {
        let path = options
            .output_dir
            .join(format!("{project}_BOM_Report_{date_tag}.txt"));
        let header = ReportHeader {
            project: project.clone(),
            generated_at: now.naive_local(),
            input_path: options.input.display().to_string(),
            encoding: loaded.encoding.clone(),
            row_count: input_rows,
        };
        write_report(&path, &render_report(&header, &output.ledger, &config))?;
        Some(path)
    } else {
        None
    };

    info!(
        rows = input_rows,
        issues = output.ledger.len(),
        output = %output_file.display(),
        "run complete"
    );

    Ok(RunResult {
        project,
        encoding: loaded.encoding,
        input_rows,
        output_file,
        report_file,
        ledger: output.ledger,
        config,
    })
}

/// Run, print the console summary, and return the process exit status.
pub fn execute(options: &RunOptions, quiet: bool) -> i32 {
    match run(options) {
        Ok(result) => {
            print_summary(&result, quiet);
            0
        }
        Err(error) => {
            tracing::error!(%error, "run failed");
            eprintln!("[ERROR] {error}");
            error.exit_code()
        }
    }
}

/// Load the mapping config, falling back to the defaults.
///
/// A fallback is always reported on stderr, independent of the log level.
fn load_mapping(path: Option<&Path>) -> BomConfig {
    let Some(path) = path else {
        return BomConfig::default();
    };
    match try_load_config(path) {
        Ok(config) => {
            info!(path = %path.display(), "loaded mapping config");
            config
        }
        Err(error) => {
            tracing::warn!(
                path = %path.display(),
                %error,
                "failed to load mapping config, using defaults"
            );
            eprintln!("{}", mapping_fallback_warning(path, &error));
            BomConfig::default()
        }
    }
}

fn mapping_fallback_warning(path: &Path, error: &ConfigError) -> String {
    format!("[WARN] 读取 mapping 失败，使用默认配置: {} ({error})", path.display())
}

fn project_name(options: &RunOptions) -> String {
    options
        .project_name
        .clone()
        .filter(|name| !name.trim().is_empty())
        .or_else(|| {
            options
                .input
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "BOM".to_string())
}

fn spreadsheet_path(dir: &Path, project: &str, date_tag: &str, config: &BomConfig) -> PathBuf {
    let extension = config.options.export_format.extension();
    dir.join(format!("{project}_BOM_{date_tag}.{extension}"))
}
