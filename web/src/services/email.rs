//! Diagnostic email-sender call.

use shared::dto::email::EmailSendRequest;
use shared::ApiError;

use super::api;

pub async fn send(token: &str, request: &EmailSendRequest) -> Result<String, ApiError> {
    api::post_text("/api/email/send", Some(token), request).await
}
