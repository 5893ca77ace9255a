//! Response-body interpretation for the registration endpoint.
//!
//! The backend does not commit to a response shape: a plain object, an array
//! whose first element carries an `error`, or a bare string body are all
//! possible, and a business-level rejection can ride on an HTTP 200. These
//! heuristics — including the Spanish substring sniffing for duplicates —
//! mirror the backend's observed behavior and deliberately stay
//! string-dependent for compatibility with it.

use serde_json::Value;

const ERROR_PHRASES: [&str; 3] = ["ya se encuentra", "duplicado", "existe"];

/// The only phrase the backend is known to emit as a bare string body.
const STRING_BODY_ERROR_PHRASE: &str = "ya se encuentra";

/// Generic fallback when no specific error text can be extracted.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Error desconocido al procesar la solicitud";

/// JavaScript-style truthiness, used because the backend signals errors with
/// whatever value is handy (`true`, a message string, a nested object).
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(_) => true,
    }
}

fn contains_error_phrase(text: &str) -> bool {
    ERROR_PHRASES.iter().any(|phrase| text.contains(phrase))
}

/// Whether the body carries a business-level error signal. Overrides a
/// transport-level 200 OK.
pub fn has_business_error(body: &Value) -> bool {
    match body {
        Value::String(text) => text.contains(STRING_BODY_ERROR_PHRASE),
        Value::Array(items) => items.first().is_some_and(|first| is_truthy(first.get("error"))),
        Value::Object(map) => {
            is_truthy(map.get("error"))
                || map
                    .get("message")
                    .and_then(Value::as_str)
                    .is_some_and(contains_error_phrase)
        }
        _ => false,
    }
}

/// Whether the body carries an explicit positive signal. The absence of an
/// HTTP error status alone is never sufficient.
pub fn is_success_response(body: &Value) -> bool {
    match body {
        Value::Object(map) => {
            map.get("success") == Some(&Value::Bool(true))
                || map.get("status").and_then(Value::as_str) == Some("success")
                || (!is_truthy(map.get("error")) && !is_truthy(map.get("message")))
        }
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Extract the most specific human-readable error text.
///
/// Priority: explicit `error` field > `message` field > first array
/// element's `error` > generic fallback.
pub fn extract_error_message(body: &Value) -> String {
    if let Some(text) = body.as_str() {
        return text.to_string();
    }
    if let Some(map) = body.as_object() {
        if let Some(error) = map.get("error").and_then(Value::as_str) {
            return error.to_string();
        }
        if let Some(message) = map.get("message").and_then(Value::as_str) {
            return message.to_string();
        }
    }
    if let Some(first) = body.as_array().and_then(|items| items.first())
        && let Some(error) = first.get("error").and_then(Value::as_str)
    {
        return error.to_string();
    }
    UNKNOWN_ERROR_MESSAGE.to_string()
}
