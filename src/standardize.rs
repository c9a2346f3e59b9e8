//! Rename and reorder columns to the standard layout

use serde_json::Value;

use crate::error::{RemapError, RemapResult};
use crate::types::{ColumnMapping, SheetTable};

/// Rename every header whose mapping value is a string. Other headers keep
/// their names. No conflict detection: two sources may map to one target.
pub fn rename_columns(table: &mut SheetTable, mapping: &ColumnMapping) {
    for header in table.headers.iter_mut() {
        if let Some(Value::String(renamed)) = mapping.get(header.as_str()) {
            *header = renamed.clone();
        }
    }
}

/// Keep exactly the `target` columns, in `target` order.
///
/// A name carried by several columns selects all of them, in their
/// original order. Every missing name is reported in a single error.
pub fn select_columns(table: &SheetTable, target: &[String]) -> RemapResult<SheetTable> {
    let mut indices = Vec::with_capacity(target.len());
    let mut missing = Vec::new();

    for name in target {
        let before = indices.len();
        indices.extend(
            table
                .headers
                .iter()
                .enumerate()
                .filter(|(_, header)| *header == name)
                .map(|(idx, _)| idx),
        );
        if indices.len() == before {
            missing.push(name.clone());
        }
    }

    if !missing.is_empty() {
        return Err(RemapError::MissingColumns(missing));
    }

    let headers = indices.iter().map(|&i| table.headers[i].clone()).collect();
    let rows = table
        .rows
        .iter()
        .map(|row| indices.iter().map(|&i| row[i].clone()).collect())
        .collect();

    Ok(SheetTable::new(headers, rows))
}

/// Apply the mapping, then restrict the table to the standard columns
pub fn standardize(
    mut table: SheetTable,
    target: &[String],
    mapping: &ColumnMapping,
) -> RemapResult<SheetTable> {
    rename_columns(&mut table, mapping);
    select_columns(&table, target)
}
