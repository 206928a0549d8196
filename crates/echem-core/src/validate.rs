//! Request body validation for the chat endpoint.
//!
//! Operates on the raw JSON body so that "missing" and "not a string" are
//! distinguishable failures. Checks type and length only; the semantic
//! content of an accepted message is returned unchanged.

use serde_json::Value;

use echem_types::error::ValidationError;

/// The single field the chat endpoint reads from the request body.
pub const MESSAGE_FIELD: &str = "message";

/// Maximum accepted message length, counted in Unicode scalar values.
pub const MAX_MESSAGE_CHARS: usize = 5000;

/// Extract and validate the `message` field from a JSON request body.
///
/// Rejects a missing or `null` field, a non-string value, an empty or
/// whitespace-only string, and a string longer than
/// [`MAX_MESSAGE_CHARS`]. The length bound applies to the raw, untrimmed
/// string.
pub fn validate_message(body: &Value) -> Result<String, ValidationError> {
    let value = match body.get(MESSAGE_FIELD) {
        None | Some(Value::Null) => {
            return Err(ValidationError::Missing {
                field: MESSAGE_FIELD,
            });
        }
        Some(value) => value,
    };

    let text = value.as_str().ok_or(ValidationError::NotAString {
        field: MESSAGE_FIELD,
    })?;

    if text.trim().is_empty() {
        return Err(ValidationError::Empty {
            field: MESSAGE_FIELD,
        });
    }

    if text.chars().count() > MAX_MESSAGE_CHARS {
        return Err(ValidationError::TooLong {
            field: MESSAGE_FIELD,
            max: MAX_MESSAGE_CHARS,
        });
    }

    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_single_character() {
        let body = json!({ "message": "x" });
        assert_eq!(validate_message(&body).unwrap(), "x");
    }

    #[test]
    fn test_accepts_max_length() {
        let body = json!({ "message": "x".repeat(MAX_MESSAGE_CHARS) });
        assert_eq!(
            validate_message(&body).unwrap().chars().count(),
            MAX_MESSAGE_CHARS
        );
    }

    #[test]
    fn test_rejects_over_max_length() {
        let body = json!({ "message": "x".repeat(MAX_MESSAGE_CHARS + 1) });
        assert_eq!(
            validate_message(&body).unwrap_err(),
            ValidationError::TooLong {
                field: "message",
                max: MAX_MESSAGE_CHARS,
            }
        );
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // 5000 three-byte characters; 15000 bytes but exactly at the bound.
        let body = json!({ "message": "අ".repeat(MAX_MESSAGE_CHARS) });
        assert!(validate_message(&body).is_ok());
    }

    #[test]
    fn test_rejects_empty_string() {
        let body = json!({ "message": "" });
        assert_eq!(
            validate_message(&body).unwrap_err(),
            ValidationError::Empty { field: "message" }
        );
    }

    #[test]
    fn test_rejects_whitespace_only() {
        let body = json!({ "message": "   \n\t " });
        assert_eq!(
            validate_message(&body).unwrap_err(),
            ValidationError::Empty { field: "message" }
        );
    }

    #[test]
    fn test_rejects_missing_field() {
        let body = json!({ "other": "value" });
        assert_eq!(
            validate_message(&body).unwrap_err(),
            ValidationError::Missing { field: "message" }
        );
    }

    #[test]
    fn test_rejects_null_field() {
        let body = json!({ "message": null });
        assert_eq!(
            validate_message(&body).unwrap_err(),
            ValidationError::Missing { field: "message" }
        );
    }

    #[test]
    fn test_rejects_non_string_values() {
        for value in [json!(42), json!(true), json!(["a"]), json!({"a": 1})] {
            let body = json!({ "message": value });
            assert_eq!(
                validate_message(&body).unwrap_err(),
                ValidationError::NotAString { field: "message" }
            );
        }
    }

    #[test]
    fn test_rejects_non_object_body() {
        let body = json!("just a string");
        assert_eq!(
            validate_message(&body).unwrap_err(),
            ValidationError::Missing { field: "message" }
        );
    }

    #[test]
    fn test_accepted_content_is_unchanged() {
        let body = json!({ "message": "  keep my spaces  " });
        assert_eq!(validate_message(&body).unwrap(), "  keep my spaces  ");
    }
}
