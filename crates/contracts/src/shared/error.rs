use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Message the API puts on a field-validation failure.
pub const VALIDATION_ERROR_MESSAGE: &str = "Validation error";

/// Error body returned by the API on a non-2xx response.
///
/// Validation failures look like
/// `{ "message": "Validation error", "items": { "email": "invalid" } }`,
/// everything else carries only `message`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub items: Option<Value>,
}

impl ApiErrorBody {
    /// Per-field messages, if the body carries any.
    ///
    /// A field may map to a single string or to a list of strings; lists are
    /// joined with `"; "`. Anything that is not an object yields `None`.
    pub fn field_errors(&self) -> Option<BTreeMap<String, String>> {
        let Value::Object(items) = self.items.as_ref()? else {
            return None;
        };

        let fields: BTreeMap<String, String> = items
            .iter()
            .filter_map(|(field, message)| {
                let text = match message {
                    Value::String(s) => s.clone(),
                    Value::Array(parts) => parts
                        .iter()
                        .filter_map(|p| p.as_str())
                        .collect::<Vec<_>>()
                        .join("; "),
                    Value::Null => return None,
                    other => other.to_string(),
                };
                Some((field.clone(), text))
            })
            .collect();

        if fields.is_empty() {
            None
        } else {
            Some(fields)
        }
    }

    /// Server message, ignoring blank strings.
    pub fn message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_body() {
        let body: ApiErrorBody = serde_json::from_str(
            r#"{ "message": "Validation error", "items": { "email": "invalid", "phone": ["too short", "digits only"] } }"#,
        )
        .unwrap();

        let fields = body.field_errors().unwrap();
        assert_eq!(fields.get("email").map(String::as_str), Some("invalid"));
        assert_eq!(
            fields.get("phone").map(String::as_str),
            Some("too short; digits only")
        );
        assert_eq!(body.message(), Some(VALIDATION_ERROR_MESSAGE));
    }

    #[test]
    fn test_general_body_has_no_field_errors() {
        let body: ApiErrorBody = serde_json::from_str(r#"{ "message": "Not found" }"#).unwrap();
        assert_eq!(body.field_errors(), None);
        assert_eq!(body.message(), Some("Not found"));
    }

    #[test]
    fn test_non_object_items_are_ignored() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{ "message": "Boom", "items": [] }"#).unwrap();
        assert_eq!(body.field_errors(), None);

        let body: ApiErrorBody =
            serde_json::from_str(r#"{ "message": "  ", "items": {} }"#).unwrap();
        assert_eq!(body.field_errors(), None);
        assert_eq!(body.message(), None);
    }
}
