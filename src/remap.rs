//! End-to-end remapping: read headers → request mapping → standardize → encode

use tracing::{debug, info};

use crate::error::RemapResult;
use crate::excel::{read_table, write_table};
use crate::mapping::MappingProvider;
use crate::standardize::standardize;
use crate::types::ColumnMapping;

/// Result of one remapping run
#[derive(Debug, Clone, PartialEq)]
pub struct RemapOutcome {
    pub standard_columns: Vec<String>,
    pub excel_columns: Vec<String>,
    pub mapping: ColumnMapping,
    pub excel_file: Vec<u8>,
}

/// Split a comma separated header list. All spaces are removed first, so
/// `"Question Number, Notes"` yields `["QuestionNumber", "Notes"]`.
pub fn parse_standard_columns(list: &str) -> Vec<String> {
    list.replace(' ', "")
        .split(',')
        .map(|s| s.to_string())
        .collect()
}

/// Remap a workbook's first worksheet onto `standard_columns`
pub async fn remap_workbook(
    workbook: &[u8],
    standard_columns: &[String],
    provider: &dyn MappingProvider,
) -> RemapResult<RemapOutcome> {
    let table = read_table(workbook)?;
    let excel_columns = table.headers.clone();
    info!(
        columns = excel_columns.len(),
        rows = table.row_count(),
        "Read source worksheet"
    );

    let mapping = provider
        .create_mapping(&excel_columns, standard_columns)
        .await?;
    debug!(?mapping, "Column mapping received");

    let standardized = standardize(table, standard_columns, &mapping)?;
    let excel_file = write_table(&standardized)?;
    info!(
        columns = standardized.width(),
        bytes = excel_file.len(),
        "Wrote standardized worksheet"
    );

    Ok(RemapOutcome {
        standard_columns: standard_columns.to_vec(),
        excel_columns,
        mapping,
        excel_file,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RemapError;
    use crate::mapping::StaticMapping;
    use crate::types::{CellValue, SheetTable};
    use pretty_assertions::assert_eq;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_standard_columns_strips_spaces() {
        assert_eq!(
            parse_standard_columns("Number, Section ,Question"),
            strings(&["Number", "Section", "Question"])
        );
        assert_eq!(
            parse_standard_columns("Reference Links"),
            strings(&["ReferenceLinks"])
        );
    }

    #[test]
    fn test_parse_standard_columns_keeps_empty_segments() {
        assert_eq!(parse_standard_columns("a,,b"), strings(&["a", "", "b"]));
    }

    #[tokio::test]
    async fn test_remap_workbook_end_to_end() {
        let source = SheetTable::new(
            strings(&["Answer", "Question"]),
            vec![vec![
                CellValue::Text("Yes".to_string()),
                CellValue::Text("Encrypted?".to_string()),
            ]],
        );
        let workbook = write_table(&source).unwrap();
        let provider = StaticMapping::from_json(r#"{"Answer":"Response","Question":"Question"}"#).unwrap();
        let target = strings(&["Question", "Response"]);

        let outcome = remap_workbook(&workbook, &target, &provider).await.unwrap();

        assert_eq!(outcome.excel_columns, strings(&["Answer", "Question"]));
        assert_eq!(outcome.standard_columns, target);
        assert_eq!(outcome.mapping["Answer"], "Response");

        let out = read_table(&outcome.excel_file).unwrap();
        assert_eq!(out.headers, target);
        assert_eq!(
            out.rows,
            vec![vec![
                CellValue::Text("Encrypted?".to_string()),
                CellValue::Text("Yes".to_string()),
            ]]
        );
    }

    #[tokio::test]
    async fn test_remap_workbook_missing_target() {
        let source = SheetTable::new(strings(&["Answer"]), vec![]);
        let workbook = write_table(&source).unwrap();
        let provider = StaticMapping::default();

        let result = remap_workbook(&workbook, &strings(&["Response"]), &provider).await;
        assert!(matches!(result, Err(RemapError::MissingColumns(_))));
    }

    #[tokio::test]
    async fn test_remap_workbook_unreadable_input() {
        let provider = StaticMapping::default();
        let result = remap_workbook(b"garbage", &strings(&["A"]), &provider).await;
        assert!(matches!(result, Err(RemapError::Spreadsheet(_))));
    }
}
