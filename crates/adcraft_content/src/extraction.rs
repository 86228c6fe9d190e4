//! Utilities for extracting structured data from LLM responses.
//!
//! LLM responses often wrap JSON in markdown code fences or explanatory
//! prose. The first balanced `{ ... }` object is taken as the payload;
//! braces inside string literals do not count towards the balance.

use adcraft_error::{GenerationError, GenerationErrorKind};
use tracing::error;

/// Extract the first balanced JSON object from a response.
///
/// # Errors
///
/// Returns `MalformedResponse` if the response contains no balanced object.
///
/// # Examples
///
/// ```
/// use adcraft_content::extract_json;
///
/// let response = "Here's your ad:\n```json\n{\"caption\": \"Hi {there}\"}\n```\nEnjoy!";
/// assert_eq!(extract_json(response).unwrap(), "{\"caption\": \"Hi {there}\"}");
/// ```
pub fn extract_json(response: &str) -> Result<&str, GenerationError> {
    match extract_balanced(response, '{', '}') {
        Some(json) => Ok(json),
        None => {
            error!(
                response_length = response.len(),
                "No JSON object found in LLM response"
            );
            Err(GenerationError::new(GenerationErrorKind::MalformedResponse(
                format!(
                    "no JSON object found in response (length: {})",
                    response.len()
                ),
            )))
        }
    }
}

/// Extract content between balanced delimiters.
///
/// Finds the first occurrence of `open` and returns the slice up to the
/// matching `close`, handling nesting, string literals and escapes.
fn extract_balanced(response: &str, open: char, close: char) -> Option<&str> {
    let start = response.find(open)?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in response[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match ch {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            c if c == open && !in_string => depth += 1,
            c if c == close && !in_string => {
                depth -= 1;
                if depth == 0 {
                    let end = start + i + c.len_utf8();
                    return Some(&response[start..end]);
                }
            }
            _ => {}
        }
    }

    None
}

/// Parse JSON into a specific type.
///
/// # Errors
///
/// Returns `MalformedResponse` if the string cannot be decoded into `T`.
pub fn parse_json<T>(json_str: &str) -> Result<T, GenerationError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(json_str).map_err(|e| {
        let preview = json_str.chars().take(100).collect::<String>();

        error!(
            error = %e,
            json_preview = %preview,
            "JSON parsing failed"
        );

        GenerationError::new(GenerationErrorKind::MalformedResponse(format!(
            "failed to parse JSON: {} (JSON: {}...)",
            e, preview
        )))
    })
}
