//! Decoding of raw model output into a loosely-typed JSON value.
//!
//! Models occasionally wrap the JSON object in a markdown fence despite being
//! told not to. One optional leading fence marker (with or without a language
//! tag, any case) and one optional trailing marker are stripped before
//! parsing; everything else must be valid JSON.

use super::error::EvalError;
use serde_json::Value;

/// Strip incidental fencing and parse the remainder as JSON.
pub fn decode_response(raw: &str) -> Result<Value, EvalError> {
    let stripped = strip_fences(raw);
    serde_json::from_str(stripped).map_err(|e| EvalError::MalformedOutput(e.to_string()))
}

/// Remove a single leading ``` marker (optionally tagged, e.g. ```json or
/// ```JSON) and a single trailing ``` marker. Idempotent on unfenced input.
fn strip_fences(raw: &str) -> &str {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix("```") {
        let rest = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric());
        text = rest.trim_start();
    }

    if let Some(rest) = text.strip_suffix("```") {
        text = rest.trim_end();
    }

    text
}
