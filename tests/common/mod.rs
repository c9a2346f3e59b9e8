//! Shared fixtures for integration tests

#![allow(dead_code)]

use excel_remap::excel::write_table;
use excel_remap::{CellValue, SheetTable};

pub fn strings(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

pub fn text(v: &str) -> CellValue {
    CellValue::Text(v.to_string())
}

pub const SOURCE_HEADERS: [&str; 6] = [
    "Question Number",
    "Section Title",
    "Question",
    "Answer",
    "Comments",
    "Reference Links",
];

pub const STANDARD_HEADERS: [&str; 6] =
    ["Number", "Section", "Question", "Response", "Notes", "Reference"];

pub const QUESTIONNAIRE_MAPPING: &str = r#"{
    "Question Number": "Number",
    "Section Title": "Section",
    "Question": "Question",
    "Answer": "Response",
    "Comments": "Notes",
    "Reference Links": "Reference"
}"#;

/// A security questionnaire in the caller's own layout
pub fn questionnaire() -> SheetTable {
    SheetTable::new(
        strings(&SOURCE_HEADERS),
        vec![
            vec![
                CellValue::Number(1.0),
                text("Data Protection"),
                text("Is customer data encrypted at rest?"),
                text("Yes"),
                text("AES-256 on all volumes"),
                text("https://example.com/security/encryption"),
            ],
            vec![
                CellValue::Number(2.0),
                text("Access Control"),
                text("Is MFA enforced for administrators?"),
                text("Yes"),
                CellValue::Empty,
                text("https://example.com/security/mfa"),
            ],
            vec![
                CellValue::Number(3.0),
                text("Logging"),
                text("Are audit logs retained for a year?"),
                text("No"),
                text("90 days today"),
                CellValue::Empty,
            ],
        ],
    )
}

pub fn questionnaire_xlsx() -> Vec<u8> {
    write_table(&questionnaire()).unwrap()
}
