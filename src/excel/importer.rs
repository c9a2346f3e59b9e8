//! Excel importer implementation - spreadsheet bytes → SheetTable

use crate::error::{RemapError, RemapResult};
use crate::types::{CellValue, SheetTable};
use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use std::collections::HashSet;
use std::io::Cursor;

/// Reads the first worksheet of an in-memory workbook.
///
/// The format (xlsx, xlsm, xlsb, xls, ods) is detected from the content.
/// The first row is the header row; every following row is data.
pub struct ExcelImporter {
    data: Vec<u8>,
}

impl ExcelImporter {
    /// Create an importer over raw workbook bytes
    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Self {
        Self { data: data.into() }
    }

    /// Import the first worksheet
    pub fn import(&self) -> RemapResult<SheetTable> {
        let range = self.first_sheet()?;
        Ok(Self::range_to_table(&range))
    }

    /// Header names of the first worksheet, in column order
    pub fn headers(&self) -> RemapResult<Vec<String>> {
        let range = self.first_sheet()?;
        Ok(Self::header_row(&range).unwrap_or_default())
    }

    fn first_sheet(&self) -> RemapResult<Range<Data>> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(self.data.clone()))
            .map_err(|e| RemapError::Spreadsheet(format!("Failed to open workbook: {}", e)))?;

        workbook
            .worksheet_range_at(0)
            .ok_or_else(|| RemapError::Spreadsheet("Workbook has no worksheets".to_string()))?
            .map_err(RemapError::from)
    }

    fn range_to_table(range: &Range<Data>) -> SheetTable {
        let Some(headers) = Self::header_row(range) else {
            return SheetTable::default();
        };

        let lead = Self::leading_columns(range);
        let data_rows = range
            .rows()
            .skip(1)
            .map(|row| {
                let mut values = vec![CellValue::Empty; lead];
                values.extend(row.iter().map(Self::cell_value));
                values
            })
            .collect();

        SheetTable::new(headers, data_rows)
    }

    /// Blank columns left of the used range. calamine starts the range at
    /// the first non-empty cell; column A is always column 0 here.
    fn leading_columns(range: &Range<Data>) -> usize {
        range.start().map_or(0, |(_, col)| col as usize)
    }

    fn header_row(range: &Range<Data>) -> Option<Vec<String>> {
        let row = range.rows().next()?;
        let mut cells = vec![Data::Empty; Self::leading_columns(range)];
        cells.extend_from_slice(row);
        Some(Self::header_names(&cells))
    }

    /// Render the header row, naming blank cells `Unnamed: <idx>` and
    /// suffixing repeated names with `.1`, `.2`, ...
    fn header_names(row: &[Data]) -> Vec<String> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut names = Vec::with_capacity(row.len());

        for (idx, cell) in row.iter().enumerate() {
            let base = match cell {
                Data::Empty => format!("Unnamed: {}", idx),
                Data::String(s) if s.trim().is_empty() => format!("Unnamed: {}", idx),
                Data::String(s) => s.clone(),
                Data::Int(i) => i.to_string(),
                Data::Float(f) => f.to_string(),
                other => other.to_string(),
            };

            let mut name = base.clone();
            let mut suffix = 1;
            while seen.contains(&name) {
                name = format!("{}.{}", base, suffix);
                suffix += 1;
            }
            seen.insert(name.clone());
            names.push(name);
        }

        names
    }

    fn cell_value(cell: &Data) -> CellValue {
        match cell {
            Data::Empty => CellValue::Empty,
            Data::Int(i) => CellValue::Number(*i as f64),
            Data::Float(f) => CellValue::Number(*f),
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Bool(b) => CellValue::Bool(*b),
            Data::DateTime(dt) => CellValue::DateTime(dt.as_f64()),
            // ISO strings and error cells (#N/A, #DIV/0!) keep their text form
            other => CellValue::Text(other.to_string()),
        }
    }
}

/// Read the header row of the first worksheet
pub fn read_headers(data: &[u8]) -> RemapResult<Vec<String>> {
    ExcelImporter::from_bytes(data).headers()
}

/// Read the first worksheet as a table
pub fn read_table(data: &[u8]) -> RemapResult<SheetTable> {
    ExcelImporter::from_bytes(data).import()
}
