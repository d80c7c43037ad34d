//! Turns the provider-shaped history payload into the displayed series.

use crate::dto::market::ChartPayload;
use chrono::DateTime;

/// One charted sample: a calendar day and its closing price.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryPoint {
    pub date: String,
    pub close: f64,
}

/// A 200 payload whose nested fields are missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncompleteData;

/// Extract the close series from a history payload.
///
/// Timestamps are zipped with closes; samples with a null close are
/// dropped, so a payload with N pairs and K nulls yields N−K points.
pub fn build_series(payload: &ChartPayload) -> Result<Vec<HistoryPoint>, IncompleteData> {
    let result = payload
        .chart
        .result
        .as_ref()
        .and_then(|results| results.first())
        .ok_or(IncompleteData)?;
    let timestamps = result.timestamp.as_ref().ok_or(IncompleteData)?;
    let closes = result
        .indicators
        .as_ref()
        .and_then(|indicators| indicators.quote.as_ref())
        .and_then(|quotes| quotes.first())
        .and_then(|quote| quote.close.as_ref())
        .ok_or(IncompleteData)?;

    Ok(timestamps
        .iter()
        .zip(closes.iter())
        .filter_map(|(&timestamp, close)| {
            close.map(|close| HistoryPoint {
                date: format_day(timestamp),
                close,
            })
        })
        .collect())
}

/// Unix seconds to a `dd/mm/yyyy` display string.
pub fn format_day(unix_seconds: i64) -> String {
    DateTime::from_timestamp(unix_seconds, 0)
        .map(|datetime| datetime.format("%d/%m/%Y").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(json: &str) -> ChartPayload {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn null_closes_are_dropped() {
        let payload = payload(
            r#"{"chart":{"result":[{
                "timestamp":[1714521600, 1714608000, 1714694400],
                "indicators":{"quote":[{"close":[100.5, null, 101.25]}]}
            }]}}"#,
        );
        let series = build_series(&payload).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].close, 100.5);
        assert_eq!(series[1].close, 101.25);
    }

    #[test]
    fn dates_are_calendar_days() {
        // 2024-05-01 00:00:00 UTC
        let payload = payload(
            r#"{"chart":{"result":[{
                "timestamp":[1714521600],
                "indicators":{"quote":[{"close":[12.0]}]}
            }]}}"#,
        );
        let series = build_series(&payload).unwrap();
        assert_eq!(series[0].date, "01/05/2024");
    }

    #[test]
    fn missing_quote_is_incomplete_not_a_panic() {
        let payload = payload(r#"{"chart":{"result":[{"timestamp":[1714521600]}]}}"#);
        assert_eq!(build_series(&payload), Err(IncompleteData));
    }

    #[test]
    fn empty_result_is_incomplete() {
        let payload = payload(r#"{"chart":{"result":[]}}"#);
        assert_eq!(build_series(&payload), Err(IncompleteData));
        let payload = self::payload(r#"{"chart":{}}"#);
        assert_eq!(build_series(&payload), Err(IncompleteData));
    }

    #[test]
    fn all_null_closes_yield_an_empty_series() {
        let payload = payload(
            r#"{"chart":{"result":[{
                "timestamp":[1, 2],
                "indicators":{"quote":[{"close":[null, null]}]}
            }]}}"#,
        );
        assert_eq!(build_series(&payload), Ok(vec![]));
    }
}
