//! Row tables.

use thiserror::Error;

use crate::cell::CellValue;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// A row does not have one cell per header.
    #[error("row {row} has {found} cells, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A column being set does not have one value per row.
    #[error("column '{column}' has {found} values, expected {expected}")]
    ColumnLength {
        column: String,
        expected: usize,
        found: usize,
    },
}

/// The working table: named columns over an ordered list of rows.
///
/// Every row holds exactly one cell per header. Row order is the ingest order
/// until the table is sorted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BomTable {
    headers: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl BomTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Result<Self, TableError> {
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != headers.len() {
                return Err(TableError::RowWidth {
                    row: idx,
                    expected: headers.len(),
                    found: row.len(),
                });
            }
        }
        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [Vec<CellValue>] {
        &mut self.rows
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Exact, case-sensitive column lookup.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn cell(&self, row: usize, column: &str) -> Option<&CellValue> {
        let idx = self.column_index(column)?;
        self.rows.get(row).and_then(|cells| cells.get(idx))
    }

    /// Cell rendered as text, or the empty string when the column is absent.
    pub fn cell_text(&self, row: usize, column: &str) -> String {
        self.cell(row, column)
            .map(CellValue::display_text)
            .unwrap_or_default()
    }

    /// Iterate over a column's cells in row order.
    pub fn column_values<'a>(
        &'a self,
        column: &str,
    ) -> Option<impl Iterator<Item = &'a CellValue> + 'a> {
        let idx = self.column_index(column)?;
        Some(self.rows.iter().map(move |row| &row[idx]))
    }

    /// Replace a column's values, appending the column when it does not exist.
    pub fn set_column(&mut self, name: &str, values: Vec<CellValue>) -> Result<(), TableError> {
        if values.len() != self.rows.len() {
            return Err(TableError::ColumnLength {
                column: name.to_string(),
                expected: self.rows.len(),
                found: values.len(),
            });
        }
        match self.column_index(name) {
            Some(idx) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row[idx] = value;
                }
            }
            None => {
                self.headers.push(name.to_string());
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.push(value);
                }
            }
        }
        Ok(())
    }

    /// Reorder rows so that new row `i` is old row `order[i]`.
    ///
    /// `order` must be a permutation of `0..len()`.
    pub fn reorder(&mut self, order: &[usize]) {
        debug_assert_eq!(order.len(), self.rows.len());
        let mut taken: Vec<Option<Vec<CellValue>>> = self.rows.drain(..).map(Some).collect();
        self.rows = order
            .iter()
            .filter_map(|&idx| taken.get_mut(idx).and_then(Option::take))
            .collect();
    }
}

/// Rows projected onto the output schema, ready for rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl ProjectedTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Cells of column `idx` in row order.
    pub fn column(&self, idx: usize) -> impl Iterator<Item = &CellValue> + '_ {
        self.rows.iter().filter_map(move |row| row.get(idx))
    }
}
