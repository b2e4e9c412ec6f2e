use crate::BodySnippetConfig;
use http::HeaderMap;
use serde_json::Value;

use super::redact::{redact_text, truncate_utf8};

pub(crate) fn request_id(headers: &HeaderMap) -> Option<Box<str>> {
    for name in ["x-request-id", "x-correlation-id"] {
        if let Some(value) = headers.get(name).and_then(|v| v.to_str().ok()) {
            let value = value.trim();
            if !value.is_empty() {
                return Some(value.to_string().into_boxed_str());
            }
        }
    }
    None
}

/// Best-effort message lookup in a loosely shaped error body. The platform
/// usually sends `message`, but some routes report `error` or a plain-string
/// `detail`.
pub(crate) fn extract_message(body: &[u8]) -> Option<Box<str>> {
    let value = serde_json::from_slice::<Value>(body).ok()?;

    for key in ["message", "error", "detail", "error_message"] {
        if let Some(msg) = value.get(key).and_then(|v| v.as_str()) {
            let msg = msg.trim();
            if !msg.is_empty() {
                return Some(msg.to_string().into_boxed_str());
            }
        }
    }
    None
}

/// Server-supplied machine code, when the body carries a string `code`.
pub(crate) fn extract_code(body: &[u8]) -> Option<Box<str>> {
    let value = serde_json::from_slice::<Value>(body).ok()?;
    let code = value.get("code")?.as_str()?.trim();
    if code.is_empty() {
        return None;
    }
    Some(code.to_string().into_boxed_str())
}

/// The structured `detail` payload of a 422, verbatim. `Null` when the body
/// is not JSON or has no such field.
pub(crate) fn extract_detail(body: &[u8]) -> Value {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|mut value| match value.get_mut("detail") {
            Some(detail) => Some(detail.take()),
            None => None,
        })
        .unwrap_or(Value::Null)
}

pub(crate) fn body_snippet(
    body: &[u8],
    config: BodySnippetConfig,
    secrets: &[String],
) -> Option<Box<str>> {
    if !config.enabled {
        return None;
    }

    let body = String::from_utf8_lossy(body);
    let snippet = truncate_utf8(&body, config.max_bytes).to_string();
    Some(redact_text(snippet, secrets).into_boxed_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_message_from_common_keys() {
        assert_eq!(
            extract_message(br#"{"message":"boom"}"#).as_deref(),
            Some("boom")
        );
        assert_eq!(
            extract_message(br#"{"detail":"not found"}"#).as_deref(),
            Some("not found")
        );
        assert_eq!(extract_message(b"not json"), None);
    }

    #[test]
    fn extracts_code_only_when_string() {
        assert_eq!(
            extract_code(br#"{"code":"RATE_LIMIT"}"#).as_deref(),
            Some("RATE_LIMIT")
        );
        assert_eq!(extract_code(br#"{"code":42}"#), None);
    }

    #[test]
    fn detail_is_passed_through_verbatim() {
        let detail = extract_detail(br#"{"detail":[{"loc":["body","email"],"msg":"invalid"}]}"#);
        assert_eq!(detail[0]["msg"], "invalid");
        assert_eq!(extract_detail(b"{}"), Value::Null);
    }
}
