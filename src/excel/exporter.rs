//! Excel exporter implementation - SheetTable → .xlsx bytes

use crate::error::{RemapError, RemapResult};
use crate::types::{CellValue, SheetTable};
use rust_xlsxwriter::{Format, Workbook, Worksheet};

/// Worksheet name used for exported tables
pub const SHEET_NAME: &str = "Sheet1";

const DATETIME_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";

/// Excel exporter for a single table: bold header row, data rows below,
/// no index column
pub struct ExcelExporter<'a> {
    table: &'a SheetTable,
}

impl<'a> ExcelExporter<'a> {
    pub fn new(table: &'a SheetTable) -> Self {
        Self { table }
    }

    /// Serialize the table to an in-memory .xlsx workbook
    pub fn to_bytes(&self) -> RemapResult<Vec<u8>> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(SHEET_NAME)
            .map_err(|e| RemapError::Export(format!("Failed to set worksheet name: {}", e)))?;

        self.write_sheet(worksheet)?;

        workbook
            .save_to_buffer()
            .map_err(|e| RemapError::Export(format!("Failed to save workbook: {}", e)))
    }

    fn write_sheet(&self, worksheet: &mut Worksheet) -> RemapResult<()> {
        let header_format = Format::new().set_bold();
        let datetime_format = Format::new().set_num_format(DATETIME_FORMAT);

        for (col_idx, name) in self.table.headers.iter().enumerate() {
            let col = Self::column_number(col_idx)?;
            worksheet
                .write_string_with_format(0, col, name, &header_format)
                .map_err(|e| RemapError::Export(format!("Failed to write header '{}': {}", name, e)))?;
        }

        for (row_idx, row) in self.table.rows.iter().enumerate() {
            let excel_row = u32::try_from(row_idx + 1)
                .map_err(|_| RemapError::Export("Too many rows for a worksheet".to_string()))?;

            for (col_idx, cell) in row.iter().enumerate() {
                let col = Self::column_number(col_idx)?;
                let written = match cell {
                    CellValue::Empty => continue,
                    CellValue::Number(n) => worksheet.write_number(excel_row, col, *n),
                    CellValue::Text(s) => worksheet.write_string(excel_row, col, s),
                    CellValue::Bool(b) => worksheet.write_boolean(excel_row, col, *b),
                    CellValue::DateTime(d) => {
                        worksheet.write_number_with_format(excel_row, col, *d, &datetime_format)
                    }
                };
                written.map_err(|e| {
                    RemapError::Export(format!(
                        "Failed to write cell ({}, {}): {}",
                        excel_row, col, e
                    ))
                })?;
            }
        }

        Ok(())
    }

    fn column_number(idx: usize) -> RemapResult<u16> {
        u16::try_from(idx)
            .map_err(|_| RemapError::Export("Too many columns for a worksheet".to_string()))
    }
}

/// Serialize a table to .xlsx bytes
pub fn write_table(table: &SheetTable) -> RemapResult<Vec<u8>> {
    ExcelExporter::new(table).to_bytes()
}
