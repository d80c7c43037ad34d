//! History calls against the backend's finance proxy.

use shared::dto::market::{ChartPayload, RangeCode};
use shared::ApiError;

use super::api;

pub async fn fetch_history(ticker: &str, range: RangeCode) -> Result<ChartPayload, ApiError> {
    let path = format!("/finance/history/{ticker}?range={}", range.as_str());
    api::get_json(&path, None).await
}
