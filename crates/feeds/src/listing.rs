//! Typed response shapes for the listings endpoint.

use serde::Deserialize;

/// Top-level response envelope for `/v1/cryptocurrency/listings/latest`.
#[derive(Debug, Deserialize)]
pub struct ListingsResponse {
    pub status: ApiStatus,
    #[serde(default)]
    pub data: Vec<Listing>,
}

/// CMC status object. `error_code` is 0 on success.
#[derive(Debug, Deserialize)]
pub struct ApiStatus {
    pub error_code: i64,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// One asset listing as returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct Listing {
    pub name: String,
    pub symbol: String,
    /// Canonical lowercase identifier (e.g. "bitcoin")
    pub slug: String,
    pub quote: Quote,
}

/// Quote container keyed by convert currency. Only USD is requested.
#[derive(Debug, Clone, Deserialize)]
pub struct Quote {
    #[serde(rename = "USD")]
    pub usd: Option<UsdQuote>,
}

/// USD quote fields used by the watch-list filter.
/// A listing missing any of these fails deserialization, which is a
/// fetch-level error rather than something the evaluator sees.
#[derive(Debug, Clone, Deserialize)]
pub struct UsdQuote {
    pub price: f64,
    pub percent_change_1h: f64,
    pub percent_change_24h: f64,
    pub percent_change_7d: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const LISTINGS_FIXTURE: &str = r#"{
        "status": {"timestamp": "2025-03-01T00:00:00.000Z", "error_code": 0, "error_message": null},
        "data": [
            {
                "id": 1,
                "name": "Bitcoin",
                "symbol": "BTC",
                "slug": "bitcoin",
                "quote": {
                    "USD": {
                        "price": 80123.456789,
                        "percent_change_1h": 0.12,
                        "percent_change_24h": -1.5,
                        "percent_change_7d": 4.2
                    }
                }
            },
            {
                "id": 52,
                "name": "XRP",
                "symbol": "XRP",
                "slug": "xrp",
                "quote": {
                    "USD": {
                        "price": 2.345678,
                        "percent_change_1h": -0.01,
                        "percent_change_24h": 0.9,
                        "percent_change_7d": -3.3
                    }
                }
            }
        ]
    }"#;

    #[test]
    fn test_parse_listings_fixture() {
        let parsed: ListingsResponse = serde_json::from_str(LISTINGS_FIXTURE).unwrap();
        assert_eq!(parsed.status.error_code, 0);
        assert_eq!(parsed.data.len(), 2);

        let btc = &parsed.data[0];
        assert_eq!(btc.slug, "bitcoin");
        assert_eq!(btc.symbol, "BTC");
        let usd = btc.quote.usd.as_ref().unwrap();
        assert_eq!(usd.price, 80123.456789);
        assert_eq!(usd.percent_change_24h, -1.5);
    }

    #[test]
    fn test_parse_error_status() {
        let body = r#"{
            "status": {"error_code": 1001, "error_message": "API key invalid."},
            "data": []
        }"#;
        let parsed: ListingsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.status.error_code, 1001);
        assert_eq!(parsed.status.error_message.as_deref(), Some("API key invalid."));
        assert!(parsed.data.is_empty());
    }

    #[test]
    fn test_missing_quote_field_fails() {
        let body = r#"{
            "status": {"error_code": 0, "error_message": null},
            "data": [{"name": "Bitcoin", "symbol": "BTC", "slug": "bitcoin",
                      "quote": {"USD": {"price": 1.0}}}]
        }"#;
        assert!(serde_json::from_str::<ListingsResponse>(body).is_err());
    }
}
