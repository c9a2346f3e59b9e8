use thiserror::Error;

pub type RemapResult<T> = Result<T, RemapError>;

#[derive(Error, Debug)]
pub enum RemapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Spreadsheet read error: {0}")]
    Spreadsheet(String),

    #[error("Spreadsheet write error: {0}")]
    Export(String),

    #[error("Invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Model request failed: {0}")]
    Model(String),

    #[error("Model reply is not a valid JSON mapping: {0}")]
    MappingParse(#[from] serde_json::Error),

    #[error("Columns not found after remapping: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<calamine::Error> for RemapError {
    fn from(e: calamine::Error) -> Self {
        RemapError::Spreadsheet(e.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for RemapError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        RemapError::Export(e.to_string())
    }
}

impl From<reqwest::Error> for RemapError {
    fn from(e: reqwest::Error) -> Self {
        RemapError::Model(e.to_string())
    }
}
