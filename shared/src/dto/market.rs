use serde::{Deserialize, Serialize};

/// History window requested from the backend's finance proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeCode {
    ThreeDays,
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
    FiveYears,
}

impl RangeCode {
    pub const ALL: [RangeCode; 6] = [
        RangeCode::ThreeDays,
        RangeCode::OneMonth,
        RangeCode::ThreeMonths,
        RangeCode::SixMonths,
        RangeCode::OneYear,
        RangeCode::FiveYears,
    ];

    /// Wire value sent as the `range` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            RangeCode::ThreeDays => "3d",
            RangeCode::OneMonth => "1mo",
            RangeCode::ThreeMonths => "3mo",
            RangeCode::SixMonths => "6mo",
            RangeCode::OneYear => "1y",
            RangeCode::FiveYears => "5y",
        }
    }

    /// Display label for the range selector.
    pub fn label(&self) -> &'static str {
        match self {
            RangeCode::ThreeDays => "3 jours",
            RangeCode::OneMonth => "1 mois",
            RangeCode::ThreeMonths => "3 mois",
            RangeCode::SixMonths => "6 mois",
            RangeCode::OneYear => "1 an",
            RangeCode::FiveYears => "5 ans",
        }
    }

    pub fn from_str(code: &str) -> Option<RangeCode> {
        Self::ALL.iter().copied().find(|r| r.as_str() == code)
    }
}

/// Raw provider-shaped history payload, as relayed by the backend.
///
/// Every level is optional: a 200 response with missing nested fields is a
/// distinct failure mode handled by [`crate::history::build_series`].
#[derive(Debug, Clone, Deserialize)]
pub struct ChartPayload {
    pub chart: Chart,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chart {
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChartResult {
    #[serde(default)]
    pub timestamp: Option<Vec<i64>>,
    #[serde(default)]
    pub indicators: Option<Indicators>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Option<Vec<Quote>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Quote {
    #[serde(default)]
    pub close: Option<Vec<Option<f64>>>,
}

/// A saved ticker, as returned by `GET /api/star`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Favorite {
    pub ticker: String,
    pub name: String,
}

/// Body of `POST /api/star`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddFavoriteRequest {
    pub ticker: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_codes_round_trip() {
        for range in RangeCode::ALL {
            assert_eq!(RangeCode::from_str(range.as_str()), Some(range));
        }
        assert_eq!(RangeCode::from_str("2w"), None);
    }

    #[test]
    fn favorites_list_deserializes() {
        let favs: Vec<Favorite> =
            serde_json::from_str(r#"[{"ticker":"AIR.PA","name":"Airbus"}]"#).unwrap();
        assert_eq!(favs.len(), 1);
        assert_eq!(favs[0].ticker, "AIR.PA");
        assert_eq!(favs[0].name, "Airbus");
    }

    #[test]
    fn chart_payload_tolerates_missing_levels() {
        let payload: ChartPayload =
            serde_json::from_str(r#"{"chart":{"result":[{"timestamp":[1]}]}}"#).unwrap();
        let result = &payload.chart.result.unwrap()[0];
        assert_eq!(result.timestamp.as_deref(), Some(&[1][..]));
        assert!(result.indicators.is_none());
    }
}
