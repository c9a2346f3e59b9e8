//! Core data types for the column remapping workflow

use std::fmt;

/// Source header → standard header, kept exactly as the model wrote it.
///
/// Key order follows the reply. Values are usually strings; anything else
/// (e.g. `null` for a column the model left unmapped) is echoed back but
/// renames nothing.
pub type ColumnMapping = serde_json::Map<String, serde_json::Value>;

/// A single spreadsheet cell value
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Number(f64),
    Text(String),
    Bool(bool),
    /// Excel serial date-time (days since 1899-12-30)
    DateTime(f64),
}

/// A worksheet with a header row and zero or more data rows.
///
/// Rows are always padded to the header width, so `rows[r][c]` is valid for
/// every `c < headers.len()`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SheetTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl SheetTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, CellValue::Empty);
                row
            })
            .collect();
        Self { headers, rows }
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Credentials and routing for one Azure OpenAI deployment.
///
/// Built per request from caller-supplied headers and dropped with it.
#[derive(Clone, PartialEq, Eq)]
pub struct ModelConnection {
    pub api_key: String,
    pub host: String,
    pub api_version: String,
    pub deployment: String,
}

impl ModelConnection {
    pub fn new(
        api_key: impl Into<String>,
        host: impl Into<String>,
        api_version: impl Into<String>,
        deployment: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            host: host.into(),
            api_version: api_version.into(),
            deployment: deployment.into(),
        }
    }

    /// Base URL of the resource. Bare hosts are served over https.
    pub fn base_url(&self) -> String {
        let host = self.host.trim_end_matches('/');
        if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("https://{}", host)
        }
    }

    /// Chat completions URL for the configured deployment
    pub fn endpoint(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.base_url(),
            self.deployment,
            self.api_version
        )
    }
}

impl fmt::Debug for ModelConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelConnection")
            .field("api_key", &"***")
            .field("host", &self.host)
            .field("api_version", &self.api_version)
            .field("deployment", &self.deployment)
            .finish()
    }
}
