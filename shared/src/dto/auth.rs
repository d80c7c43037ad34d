use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username_or_email: String,
    pub password: String,
}

/// Google identity-federation request: the raw ID token issued by the
/// Google widget, exchanged by the backend for an application token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoogleAuthRequest {
    pub token: String,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Login / Google exchange success body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    pub token: String,
}

/// Registration success body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub user_id: i64,
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_uses_backend_field_names() {
        let req = LoginRequest {
            username_or_email: "alice".to_string(),
            password: "secret".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["usernameOrEmail"], "alice");
        assert_eq!(json["password"], "secret");
    }

    #[test]
    fn register_response_accepts_missing_message() {
        let resp: RegisterResponse =
            serde_json::from_str(r#"{"userId": 7, "username": "alice"}"#).unwrap();
        assert_eq!(resp.user_id, 7);
        assert!(resp.message.is_none());
    }
}
