//! Reading a BOM file into a [`BomTable`].

use std::path::Path;

use csv::ReaderBuilder;

use bom_model::{BomTable, CellValue};

use super::header::{clean_first_header, dedupe_headers};
use crate::encoding::{decode_with_fallback, detect_encoding};
use crate::error::{IngestError, Result};

/// A table read from disk together with the encoding used to decode it.
#[derive(Debug, Clone)]
pub struct LoadedBom {
    pub table: BomTable,
    pub encoding: String,
}

/// Parses comma-delimited text whose first record is the header.
///
/// Short records are padded with empty cells; records longer than the
/// header are rejected. Empty fields become [`CellValue::Empty`], all other
/// fields are kept verbatim.
pub fn parse_bom_csv(text: &str) -> Result<BomTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut records = reader.records();
    let header_record = match records.next() {
        Some(record) => record.map_err(csv_error)?,
        None => return Err(IngestError::EmptyCsv),
    };
    let raw_headers: Vec<String> = header_record
        .iter()
        .enumerate()
        .map(|(idx, value)| {
            if idx == 0 {
                clean_first_header(value)
            } else {
                value.to_string()
            }
        })
        .collect();
    let headers = dedupe_headers(raw_headers);
    let width = headers.len();

    let mut rows = Vec::new();
    for record in records {
        let record = record.map_err(csv_error)?;
        if record.len() > width {
            let line = record.position().map_or(0, csv::Position::line);
            return Err(IngestError::CsvParse {
                line,
                message: format!("expected {width} fields, found {}", record.len()),
            });
        }
        let mut row: Vec<CellValue> = record.iter().map(CellValue::from_raw).collect();
        row.resize(width, CellValue::Empty);
        rows.push(row);
    }

    BomTable::new(headers, rows).map_err(|error| IngestError::CsvParse {
        line: 0,
        message: error.to_string(),
    })
}

/// Reads and decodes a BOM file.
///
/// `forced_encoding` overrides detection; either way the fallback chain is
/// tried when strict decoding fails.
pub fn read_bom_file(path: &Path, forced_encoding: Option<&str>) -> Result<LoadedBom> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let bytes = std::fs::read(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let requested = forced_encoding.unwrap_or_else(|| detect_encoding(&bytes));
    tracing::debug!(path = %path.display(), encoding = requested, "decoding input");
    let decoded = decode_with_fallback(&bytes, requested)?;
    let table = parse_bom_csv(&decoded.text)?;
    tracing::info!(
        path = %path.display(),
        rows = table.len(),
        columns = table.width(),
        encoding = %decoded.encoding,
        "loaded BOM"
    );
    Ok(LoadedBom {
        table,
        encoding: decoded.encoding,
    })
}

fn csv_error(error: csv::Error) -> IngestError {
    let line = error.position().map_or(0, csv::Position::line);
    IngestError::CsvParse {
        line,
        message: error.to_string(),
    }
}
