//! Spreadsheet import/export
//!
//! - Import: workbook bytes → `SheetTable` (first worksheet, header row first)
//! - Export: `SheetTable` → .xlsx bytes
//! - Base64 transport encoding for both directions

mod encoding;
mod exporter;
mod importer;

pub use encoding::{decode_base64, encode_base64};
pub use exporter::{write_table, ExcelExporter, SHEET_NAME};
pub use importer::{read_headers, read_table, ExcelImporter};
