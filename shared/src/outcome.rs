//! Unified classification of backend responses.
//!
//! Every flow used to re-derive its own status-code mapping; instead each
//! failed call is classified once into an [`ApiError`] and the flows only
//! decide what to show and whether the session must be dropped.

use std::collections::BTreeMap;

/// Tagged outcome of a failed backend call.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 400 with an object body mapping field names to messages
    /// (registration validation).
    Validation(BTreeMap<String, String>),
    /// 401 - the session token was rejected or credentials are wrong.
    Unauthorized,
    /// 403 - authenticated but not allowed; treated as session-invalidating
    /// by the flows that hold a token.
    Forbidden,
    /// 404 - the feature is unavailable on this backend.
    NotFound,
    /// 409 - duplicate account on registration, with the backend's text
    /// when it sent one.
    Conflict(Option<String>),
    /// Any other status; carries the backend's message body when present.
    Server(Option<String>),
    /// No response received at all.
    Network,
    /// A 2xx response whose payload lacked the expected shape.
    Malformed,
}

impl ApiError {
    /// True for the statuses that invalidate the session token.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Unauthorized | ApiError::Forbidden)
    }

    /// The backend-provided message, when one was carried.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Conflict(msg) | ApiError::Server(msg) => msg.as_deref(),
            _ => None,
        }
    }
}

/// Classify a non-2xx response by status and body.
pub fn classify(status: u16, body: &str) -> ApiError {
    match status {
        400 => match parse_field_errors(body) {
            Some(fields) => ApiError::Validation(fields),
            None => ApiError::Server(extract_message(body)),
        },
        401 => ApiError::Unauthorized,
        403 => ApiError::Forbidden,
        404 => ApiError::NotFound,
        409 => ApiError::Conflict(extract_message(body)),
        _ => ApiError::Server(extract_message(body)),
    }
}

/// A 400 body shaped as `{"field": "message", …}` is a validation payload.
fn parse_field_errors(body: &str) -> Option<BTreeMap<String, String>> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let object = value.as_object()?;
    if object.is_empty() {
        return None;
    }
    let mut fields = BTreeMap::new();
    for (key, value) in object {
        fields.insert(key.clone(), value.as_str()?.to_string());
    }
    Some(fields)
}

/// Pull a human-readable message out of an error body: a JSON object's
/// `message` or `error` field, a JSON string, or the raw text itself.
fn extract_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
        if let Some(object) = value.as_object() {
            for key in ["message", "error"] {
                if let Some(text) = object.get(key).and_then(|v| v.as_str()) {
                    return Some(text.to_string());
                }
            }
            return None;
        }
        if let Some(text) = value.as_str() {
            return Some(text.to_string());
        }
    }
    Some(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_map_to_tagged_outcomes() {
        assert_eq!(classify(401, ""), ApiError::Unauthorized);
        assert_eq!(classify(403, ""), ApiError::Forbidden);
        assert_eq!(classify(404, ""), ApiError::NotFound);
        assert_eq!(classify(500, ""), ApiError::Server(None));
    }

    #[test]
    fn validation_body_becomes_field_map() {
        let err = classify(400, r#"{"username":"Trop court","email":"Invalide"}"#);
        match err {
            ApiError::Validation(fields) => {
                assert_eq!(fields["username"], "Trop court");
                assert_eq!(fields["email"], "Invalide");
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn non_object_400_falls_back_to_server() {
        assert_eq!(
            classify(400, "Bad request"),
            ApiError::Server(Some("Bad request".to_string()))
        );
    }

    #[test]
    fn conflict_prefers_structured_then_string_body() {
        assert_eq!(
            classify(409, r#"{"error":"Nom déjà pris"}"#),
            ApiError::Conflict(Some("Nom déjà pris".to_string()))
        );
        assert_eq!(
            classify(409, "Ce compte existe déjà"),
            ApiError::Conflict(Some("Ce compte existe déjà".to_string()))
        );
        assert_eq!(classify(409, ""), ApiError::Conflict(None));
    }

    #[test]
    fn server_message_read_from_object_or_text() {
        assert_eq!(
            classify(500, r#"{"message":"Oups"}"#),
            ApiError::Server(Some("Oups".to_string()))
        );
        assert_eq!(
            classify(502, "Bad gateway"),
            ApiError::Server(Some("Bad gateway".to_string()))
        );
    }

    #[test]
    fn auth_failures_are_session_invalidating() {
        assert!(ApiError::Unauthorized.is_auth_failure());
        assert!(ApiError::Forbidden.is_auth_failure());
        assert!(!ApiError::NotFound.is_auth_failure());
        assert!(!ApiError::Network.is_auth_failure());
    }
}
