//! Formatted XLSX rendering.
//!
//! One sheet: a header row, then one row per projected row. The leading
//! category column is written only through the merge pass, so each run of
//! equal labels becomes one centered cell.

use std::path::Path;

use bom_model::ProjectedTable;

use crate::error::{ReportError, Result};
use crate::layout::SheetLayout;

/// Render the table into workbook bytes.
///
/// Fails with [`ReportError::XlsxUnavailable`] when built without the `xlsx`
/// feature.
pub fn render_xlsx(table: &ProjectedTable, layout: &SheetLayout) -> Result<Vec<u8>> {
    #[cfg(feature = "xlsx")]
    {
        writer::render(table, layout)
    }
    #[cfg(not(feature = "xlsx"))]
    {
        let _ = (table, layout);
        Err(ReportError::XlsxUnavailable)
    }
}

/// Render the table and write the workbook to `path`.
pub fn write_xlsx(path: &Path, table: &ProjectedTable, layout: &SheetLayout) -> Result<()> {
    let bytes = render_xlsx(table, layout)?;
    std::fs::write(path, bytes).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), rows = table.len(), "xlsx written");
    Ok(())
}

#[cfg(feature = "xlsx")]
mod writer {
    use bom_model::{CellValue, ProjectedTable};
    use rust_xlsxwriter::{ColNum, Format, FormatAlign, FormatBorder, RowNum, Workbook, Worksheet};

    use crate::error::{ReportError, Result};
    use crate::layout::{
        QUANTITY_COLUMN, REFERENCE_COLUMN, SheetLayout, column_widths, merge_ranges,
    };

    struct Formats {
        header: Format,
        reference: Format,
        quantity: Format,
        body: Format,
        category: Format,
    }

    impl Formats {
        fn new(font_name: &str) -> Self {
            let base = Format::new()
                .set_font_name(font_name)
                .set_border(FormatBorder::Thin);
            let centered = base
                .clone()
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter);
            Self {
                header: centered.clone(),
                reference: base
                    .clone()
                    .set_align(FormatAlign::VerticalCenter)
                    .set_text_wrap(),
                quantity: centered.clone(),
                body: base.set_align(FormatAlign::VerticalCenter),
                category: centered,
            }
        }
    }

    fn row_num(idx: usize) -> Result<RowNum> {
        RowNum::try_from(idx)
            .map_err(|_| ReportError::Xlsx(format!("row {idx} exceeds sheet limits")))
    }

    fn col_num(idx: usize) -> Result<ColNum> {
        ColNum::try_from(idx)
            .map_err(|_| ReportError::Xlsx(format!("column {idx} exceeds sheet limits")))
    }

    fn write_cell(
        worksheet: &mut Worksheet,
        row: RowNum,
        col: ColNum,
        value: &CellValue,
        format: &Format,
    ) -> Result<()> {
        match value {
            CellValue::Integer(number) => {
                worksheet.write_number_with_format(row, col, *number as f64, format)?;
            }
            CellValue::Text(text) => {
                worksheet.write_string_with_format(row, col, text, format)?;
            }
            CellValue::Empty => {
                worksheet.write_blank(row, col, format)?;
            }
        }
        Ok(())
    }

    pub(super) fn render(table: &ProjectedTable, layout: &SheetLayout) -> Result<Vec<u8>> {
        let formats = Formats::new(&layout.font_name);
        let reference_idx = table.column_index(REFERENCE_COLUMN);
        let quantity_idx = table.column_index(QUANTITY_COLUMN);

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&layout.sheet_name)?;

        for (col, header) in table.headers.iter().enumerate() {
            worksheet.write_string_with_format(0, col_num(col)?, header, &formats.header)?;
        }

        for (row_idx, row) in table.rows.iter().enumerate() {
            let sheet_row = row_num(row_idx + 1)?;
            // column 0 is written by the merge pass
            for (col, value) in row.iter().enumerate().skip(1) {
                let format = if Some(col) == reference_idx {
                    &formats.reference
                } else if Some(col) == quantity_idx {
                    &formats.quantity
                } else {
                    &formats.body
                };
                write_cell(worksheet, sheet_row, col_num(col)?, value, format)?;
            }
        }

        if !table.headers.is_empty() {
            let ranges = merge_ranges(table.column(0));
            for range in &ranges {
                let first = row_num(range.start + 1)?;
                if range.is_merged() {
                    worksheet.merge_range(
                        first,
                        0,
                        row_num(range.end + 1)?,
                        0,
                        &range.value.display_text(),
                        &formats.category,
                    )?;
                } else {
                    write_cell(worksheet, first, 0, &range.value, &formats.category)?;
                }
            }
            tracing::debug!(ranges = ranges.len(), "category column merged");
        }

        for (col, width) in column_widths(table).into_iter().enumerate() {
            worksheet.set_column_width(col_num(col)?, width)?;
        }

        Ok(workbook.save_to_buffer()?)
    }
}
