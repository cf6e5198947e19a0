use serde_json::{Map, Value};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response body is not a JSON object")]
    NotAnObject,
}

#[derive(Debug, Clone, PartialEq)]
/// The gateway's response envelope: `{"success": true, ...}` on success,
/// `{"success": false, "message": "..."}` or `{"error": "..."}` on failure.
pub struct Envelope {
    pub success: bool,
    pub error_text: Option<String>,
    pub body: Map<String, Value>,
}

pub fn decode_envelope(json: &str) -> Result<Envelope, TransportError> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Object(body) = value else {
        return Err(TransportError::NotAnObject);
    };

    let success = body.get("success").is_some_and(is_truthy);
    let error_text = string_field(&body, "message").or_else(|| string_field(&body, "error"));

    Ok(Envelope {
        success,
        error_text,
        body,
    })
}

/// A missing flag is falsy; so are `false`, `0`, `"0"`, `"false"`, `""`, and
/// `null`. Anything else the gateway might put in `success` counts as truthy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => {
            !text.is_empty() && !text.eq_ignore_ascii_case("false") && text != "0"
        }
        Value::Null => false,
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn string_field(body: &Map<String, Value>, key: &str) -> Option<String> {
    match body.get(key) {
        Some(Value::String(text)) if !text.trim().is_empty() => Some(text.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_success_envelope_and_keeps_body() {
        let envelope =
            decode_envelope(r#"{"success": true, "data": {"id": "m-1"}, "quota": 9}"#).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.error_text, None);
        assert_eq!(envelope.body.get("quota"), Some(&json!(9)));
        assert_eq!(envelope.body.get("success"), Some(&json!(true)));
    }

    #[test]
    fn message_field_wins_over_error_field() {
        let envelope =
            decode_envelope(r#"{"success": false, "message": "nope", "error": "other"}"#).unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.error_text.as_deref(), Some("nope"));
    }

    #[test]
    fn error_field_is_used_when_message_is_absent() {
        let envelope = decode_envelope(r#"{"error": "boom"}"#).unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.error_text.as_deref(), Some("boom"));
    }

    #[test]
    fn missing_success_flag_is_falsy() {
        let envelope = decode_envelope(r#"{"data": []}"#).unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.error_text, None);
    }

    #[test]
    fn loosely_typed_success_flags_are_coerced() {
        for (body, expected) in [
            (r#"{"success": 1}"#, true),
            (r#"{"success": "true"}"#, true),
            (r#"{"success": 0}"#, false),
            (r#"{"success": "0"}"#, false),
            (r#"{"success": "false"}"#, false),
            (r#"{"success": null}"#, false),
        ] {
            let envelope = decode_envelope(body).unwrap();
            assert_eq!(envelope.success, expected, "body: {body}");
        }
    }

    #[test]
    fn non_object_bodies_are_rejected() {
        assert!(matches!(
            decode_envelope(r#"[1, 2]"#),
            Err(TransportError::NotAnObject)
        ));
        assert!(matches!(
            decode_envelope("{ not json }"),
            Err(TransportError::Json(_))
        ));
    }

    #[test]
    fn non_string_message_fields_are_ignored() {
        let envelope = decode_envelope(r#"{"success": false, "message": 42}"#).unwrap();
        assert_eq!(envelope.error_text, None);
    }
}
