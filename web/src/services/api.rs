//! HTTP client wrapper.
//!
//! Issues GET/POST/DELETE requests against the backend base URL, attaches
//! the bearer header when a token is supplied, and funnels every failure
//! through the shared response classifier so all flows branch on the same
//! tagged outcome.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::outcome::{classify, ApiError};

use crate::utils::constants::API_BASE;

fn endpoint(path: &str) -> String {
    format!("{API_BASE}{path}")
}

fn with_bearer(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => request.header("Authorization", &format!("Bearer {token}")),
        None => request,
    }
}

async fn classify_failure(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    classify(status, &body)
}

pub async fn get_json<T: DeserializeOwned>(
    path: &str,
    token: Option<&str>,
) -> Result<T, ApiError> {
    let response = with_bearer(Request::get(&endpoint(path)), token)
        .send()
        .await
        .map_err(|_| ApiError::Network)?;
    if !response.ok() {
        return Err(classify_failure(response).await);
    }
    response.json::<T>().await.map_err(|_| ApiError::Malformed)
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    token: Option<&str>,
    body: &B,
) -> Result<T, ApiError> {
    let response = send_post(path, token, body).await?;
    response.json::<T>().await.map_err(|_| ApiError::Malformed)
}

/// POST where only the status matters (favorite add).
pub async fn post_no_content<B: Serialize>(
    path: &str,
    token: Option<&str>,
    body: &B,
) -> Result<(), ApiError> {
    send_post(path, token, body).await.map(|_| ())
}

/// POST returning a plain-text body (email sender).
pub async fn post_text<B: Serialize>(
    path: &str,
    token: Option<&str>,
    body: &B,
) -> Result<String, ApiError> {
    let response = send_post(path, token, body).await?;
    response.text().await.map_err(|_| ApiError::Malformed)
}

pub async fn delete(path: &str, token: Option<&str>) -> Result<(), ApiError> {
    let response = with_bearer(Request::delete(&endpoint(path)), token)
        .send()
        .await
        .map_err(|_| ApiError::Network)?;
    if !response.ok() {
        return Err(classify_failure(response).await);
    }
    Ok(())
}

async fn send_post<B: Serialize>(
    path: &str,
    token: Option<&str>,
    body: &B,
) -> Result<Response, ApiError> {
    let request = with_bearer(Request::post(&endpoint(path)), token)
        .json(body)
        .map_err(|_| ApiError::Malformed)?;
    let response = request.send().await.map_err(|_| ApiError::Network)?;
    if !response.ok() {
        return Err(classify_failure(response).await);
    }
    Ok(response)
}
