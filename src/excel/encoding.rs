//! Base64 transport encoding for workbook payloads

use crate::error::RemapResult;
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Encode workbook bytes for a JSON body
pub fn encode_base64(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decode a base64 payload. Line breaks and other ASCII whitespace are
/// ignored, so MIME-wrapped input decodes as well.
pub fn decode_base64(text: &str) -> RemapResult<Vec<u8>> {
    let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    Ok(STANDARD.decode(compact)?)
}
