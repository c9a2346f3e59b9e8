//! Excel Remap - standardize spreadsheet columns with a language model
//!
//! Reads the header row of a workbook, asks an Azure OpenAI deployment to map
//! those headers onto a list of standard headers, then renames, reorders and
//! filters the columns and writes a new workbook.
//!
//! # Example
//!
//! ```no_run
//! use excel_remap::mapping::StaticMapping;
//! use excel_remap::remap::{parse_standard_columns, remap_workbook};
//!
//! # async fn run() -> excel_remap::RemapResult<()> {
//! let workbook = std::fs::read("questionnaire.xlsx")?;
//! let standard = parse_standard_columns("Number,Section,Question,Response");
//! let provider = StaticMapping::from_json(r#"{"Question Number":"Number"}"#)?;
//!
//! let outcome = remap_workbook(&workbook, &standard, &provider).await?;
//! std::fs::write("standardized.xlsx", &outcome.excel_file)?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cli;
pub mod error;
pub mod excel;
pub mod mapping;
pub mod remap;
pub mod standardize;
pub mod types;

// Re-export commonly used types
pub use error::{RemapError, RemapResult};
pub use types::{CellValue, ColumnMapping, ModelConnection, SheetTable};
