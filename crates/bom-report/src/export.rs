//! CSV export and report file writing.

use std::path::Path;

use bom_model::{CellValue, ProjectedTable};

use crate::error::{ReportError, Result};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Render the table as UTF-8 CSV with a leading byte-order mark.
pub fn render_csv(table: &ProjectedTable) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(UTF8_BOM.to_vec());
    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row.iter().map(CellValue::display_text))?;
    }
    writer
        .into_inner()
        .map_err(|err| ReportError::Csv(csv::Error::from(err.into_error())))
}

pub fn write_csv(path: &Path, table: &ProjectedTable) -> Result<()> {
    let bytes = render_csv(table)?;
    write_bytes(path, &bytes)?;
    tracing::info!(path = %path.display(), rows = table.len(), "csv written");
    Ok(())
}

/// Write the text report as UTF-8.
pub fn write_report(path: &Path, report: &str) -> Result<()> {
    write_bytes(path, report.as_bytes())?;
    tracing::info!(path = %path.display(), "report written");
    Ok(())
}

fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })
}
