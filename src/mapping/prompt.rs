//! Prompt construction and reply parsing for the mapping request

use serde::{Deserialize, Serialize};

use crate::error::RemapResult;
use crate::types::ColumnMapping;

pub const SYSTEM_PROMPT: &str = "You are an expert at manipulating excel spreadsheets.";

/// One chat message sent to the model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Render a header list the way it appears in the prompt: `['a', 'b']`
pub fn render_header_list(headers: &[String]) -> String {
    let quoted: Vec<String> = headers.iter().map(|h| quote_header(h)).collect();
    format!("[{}]", quoted.join(", "))
}

fn quote_header(header: &str) -> String {
    if header.contains('\'') && !header.contains('"') {
        return format!("\"{}\"", header.replace('\\', "\\\\"));
    }
    format!("'{}'", header.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// Build the two-message prompt asking for a source → standard mapping.
/// The output depends only on the two header lists.
pub fn build_messages(source: &[String], target: &[String]) -> [ChatMessage; 2] {
    let user = format!(
        "Create a JSON object to remap columns from the given format to the standard format.\n\n\
         The given headers are: {}\n\n\
         The standard headers are: {}\n\n\
         Give your response in JSON as in the example below, ONLY RETURN THE JSON.\n\n\
         Example: {{\"source header 1\":\"standard header 1\",\"source header 2\":\"standard header 2\"}}",
        render_header_list(source),
        render_header_list(target)
    );

    [ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(user)]
}

/// Parse the model's raw reply as a JSON object. No repair is attempted:
/// fenced or chatty replies are rejected. Values are not checked here.
pub fn parse_mapping(reply: &str) -> RemapResult<ColumnMapping> {
    Ok(serde_json::from_str(reply)?)
}
