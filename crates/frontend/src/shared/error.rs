use contracts::shared::error::ApiErrorBody;
use std::collections::BTreeMap;
use thiserror::Error;

/// Banner text shown when the server rejected individual fields.
pub const VALIDATION_PROMPT: &str = "Please fix the validation errors";
/// Last-resort message when neither the server nor the transport said anything.
pub const GENERIC_ERROR: &str = "Something went wrong. Please try again.";

/// Field name → message, as rendered next to each input.
pub type FieldErrors = BTreeMap<String, String>;

/// Failure of a call to the REST API, classified once at the HTTP boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("{}", VALIDATION_PROMPT)]
    Validation(FieldErrors),
    #[error("{0}")]
    General(String),
}

impl ApiError {
    /// Classify a failed response.
    ///
    /// `body` is the raw response text if there was one, `transport` the
    /// message describing the failure at the HTTP level.
    pub fn decode(body: Option<&str>, transport: Option<String>) -> Self {
        let parsed = body
            .filter(|text| !text.trim().is_empty())
            .and_then(|text| serde_json::from_str::<ApiErrorBody>(text).ok());
        match parsed {
            Some(body) => Self::from_body(&body, transport),
            None => Self::general(transport.as_deref()),
        }
    }

    pub fn from_body(body: &ApiErrorBody, transport: Option<String>) -> Self {
        if let Some(fields) = body.field_errors() {
            return ApiError::Validation(fields);
        }
        match body.message() {
            Some(message) => ApiError::General(message.to_string()),
            None => Self::general(transport.as_deref()),
        }
    }

    /// General error with the generic fallback for blank messages.
    pub fn general(message: Option<&str>) -> Self {
        let message = message
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(GENERIC_ERROR);
        ApiError::General(message.to_string())
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ApiError::Validation(fields) => Some(fields),
            ApiError::General(_) => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_payload_wins() {
        let err = ApiError::decode(
            Some(r#"{ "message": "Validation error", "items": { "email": "invalid" } }"#),
            Some("Request failed: 422".to_string()),
        );
        let fields = err.field_errors().unwrap();
        assert_eq!(fields.get("email").map(String::as_str), Some("invalid"));
        assert_eq!(err.to_string(), VALIDATION_PROMPT);
    }

    #[test]
    fn test_server_message_then_transport_then_default() {
        let err = ApiError::decode(
            Some(r#"{ "message": "Booking not found" }"#),
            Some("Request failed: 404".to_string()),
        );
        assert_eq!(err, ApiError::General("Booking not found".to_string()));

        let err = ApiError::decode(Some("<html>bad gateway</html>"), Some("Request failed: 502".to_string()));
        assert_eq!(err, ApiError::General("Request failed: 502".to_string()));

        let err = ApiError::decode(None, None);
        assert_eq!(err, ApiError::General(GENERIC_ERROR.to_string()));
    }

    #[test]
    fn test_message_without_items_is_general() {
        // "Validation error" with nothing structured attached stays a banner
        let err = ApiError::decode(Some(r#"{ "message": "Validation error" }"#), None);
        assert_eq!(err, ApiError::General("Validation error".to_string()));
        assert!(!err.is_validation());
    }
}
