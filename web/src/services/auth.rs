//! Authentication and account calls.

use shared::dto::auth::{
    GoogleAuthRequest, LoginRequest, RegisterRequest, RegisterResponse, TokenResponse,
};
use shared::ApiError;

use super::api;

/// Exchange credentials for an application token.
pub async fn login(identifier: &str, password: &str) -> Result<String, ApiError> {
    let body = LoginRequest {
        username_or_email: identifier.to_string(),
        password: password.to_string(),
    };
    let response: TokenResponse = api::post_json("/api/login", None, &body).await?;
    Ok(response.token)
}

/// Exchange a Google-issued ID token for an application token.
pub async fn login_with_google(id_token: &str) -> Result<String, ApiError> {
    let body = GoogleAuthRequest {
        token: id_token.to_string(),
    };
    let response: TokenResponse = api::post_json("/api/auth/google", None, &body).await?;
    Ok(response.token)
}

pub async fn register(request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
    api::post_json("/api/register", None, request).await
}

pub async fn delete_account(token: &str) -> Result<(), ApiError> {
    api::delete("/api/user/delete", Some(token)).await
}
