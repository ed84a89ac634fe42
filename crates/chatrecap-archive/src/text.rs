//! Text extraction from raw message content.

use serde_json::Value;

/// Extract the text of a raw message object.
///
/// Structured content (`{"parts": [...]}`) joins its non-empty parts with a
/// single space; any other content is stringified whole; missing content
/// yields an empty string. Never fails.
pub fn extract_text(message: &Value) -> String {
    extract_content_text(message.get("content"))
}

/// Extract text from a message's `content` field.
pub fn extract_content_text(content: Option<&Value>) -> String {
    let Some(content) = content else {
        return String::new();
    };
    if let Some(Value::Array(parts)) = content.get("parts") {
        return parts
            .iter()
            .filter(|part| !is_falsy(part))
            .map(stringify_value)
            .collect::<Vec<_>>()
            .join(" ");
    }
    if is_falsy(content) {
        String::new()
    } else {
        stringify_value(content)
    }
}

/// String form of a JSON value: strings verbatim, everything else as compact JSON.
pub fn stringify_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}
