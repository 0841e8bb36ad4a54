//! Parse LLM output into a recommendation list

use crate::LlmError;
use serde_json::Value;
use tracing::debug;
use vitalis_domain::strip_list_marker;

/// Parse an LLM response into recommendation strings
///
/// Accepts, in order of preference:
/// - a JSON array of strings (optionally wrapped in a markdown code block)
/// - a JSON object with a `recommendations` array
/// - plain text with one item per line, bullets or numbering stripped
///
/// Blank items are dropped. A response with no usable item is an
/// `InvalidResponse`.
pub fn parse_recommendation_list(response: &str) -> Result<Vec<String>, LlmError> {
    let body = strip_code_fence(response);

    let items = match serde_json::from_str::<Value>(&body) {
        Ok(Value::Array(values)) => strings_from(&values)?,
        Ok(Value::Object(object)) => match object.get("recommendations") {
            Some(Value::Array(values)) => strings_from(values)?,
            _ => {
                return Err(LlmError::InvalidResponse(
                    "JSON object has no 'recommendations' array".to_string(),
                ))
            }
        },
        Ok(_) | Err(_) => {
            debug!("Response is not a JSON list, reading it line by line");
            body.lines().map(strip_list_marker).map(str::to_string).collect()
        }
    };

    let items: Vec<String> = items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect();

    if items.is_empty() {
        return Err(LlmError::InvalidResponse("No recommendations in response".to_string()));
    }
    Ok(items)
}

fn strings_from(values: &[Value]) -> Result<Vec<String>, LlmError> {
    values
        .iter()
        .map(|value| {
            value
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| LlmError::InvalidResponse(format!("Expected string item, got {}", value)))
        })
        .collect()
}

/// Remove a surrounding markdown code block, if any
fn strip_code_fence(response: &str) -> String {
    let trimmed = response.trim();
    if !trimmed.starts_with("```") {
        return trimmed.to_string();
    }

    let lines: Vec<&str> = trimmed.lines().collect();
    let end = if lines.len() > 1 && lines[lines.len() - 1].trim_start().starts_with("```") {
        lines.len() - 1
    } else {
        lines.len()
    };
    // Skip the opening fence line (```json or ```)
    lines[1.min(end)..end].join("\n")
}
