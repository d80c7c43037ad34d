//! Favorites CRUD, all bearer-authorized.

use shared::dto::market::{AddFavoriteRequest, Favorite};
use shared::ApiError;

use super::api;

pub async fn list(token: &str) -> Result<Vec<Favorite>, ApiError> {
    api::get_json("/api/star", Some(token)).await
}

pub async fn add(token: &str, ticker: &str) -> Result<(), ApiError> {
    let body = AddFavoriteRequest {
        ticker: ticker.to_string(),
    };
    api::post_no_content("/api/star", Some(token), &body).await
}

pub async fn remove(token: &str, ticker: &str) -> Result<(), ApiError> {
    api::delete(&format!("/api/star/{ticker}"), Some(token)).await
}
