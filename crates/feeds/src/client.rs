//! CoinMarketCap listings client.
//!
//! One GET per evaluation pass; no retry or rate-limit handling here.
//! The scheduler simply tries again on the next interval.

use crate::error::FeedError;
use crate::listing::{Listing, ListingsResponse};
use std::time::Duration;
use tracing::debug;

const BASE_URL: &str = "https://pro-api.coinmarketcap.com";
const LISTINGS_PATH: &str = "/v1/cryptocurrency/listings/latest";

/// Client for the CoinMarketCap pro API.
pub struct CmcClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl CmcClient {
    /// Create a client with the default base URL and a 10s request timeout.
    pub fn new(api_key: impl Into<String>) -> Result<Self, FeedError> {
        Self::with_base_url(api_key, BASE_URL)
    }

    /// Create a client against a specific base URL.
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, FeedError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: base_url.into(),
        })
    }

    /// Fetch the top `limit` listings converted to USD.
    ///
    /// Every returned listing carries a complete USD quote; a listing
    /// without one fails the whole fetch so the pass is skipped instead of
    /// evaluated against a broken snapshot.
    pub async fn fetch_listings(&self, limit: u32) -> Result<Vec<Listing>, FeedError> {
        let url = format!("{}{}", self.base_url, LISTINGS_PATH);

        let response = self
            .http
            .get(&url)
            .header("X-CMC_PRO_API_KEY", &self.api_key)
            .header(reqwest::header::ACCEPT, "application/json")
            .query(&[
                ("start", "1"),
                ("limit", &limit.to_string()),
                ("convert", "USD"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let parsed: ListingsResponse = serde_json::from_str(&body)?;
        let listings = validate_response(parsed)?;

        debug!(count = listings.len(), "Fetched listings snapshot");
        Ok(listings)
    }
}

/// Reject a parsed response whose status reports an error or whose
/// listings are missing their USD quote.
fn validate_response(parsed: ListingsResponse) -> Result<Vec<Listing>, FeedError> {
    if parsed.status.error_code != 0 {
        return Err(FeedError::Api {
            code: parsed.status.error_code,
            message: parsed
                .status
                .error_message
                .unwrap_or_else(|| "unknown".to_string()),
        });
    }

    for listing in &parsed.data {
        if listing.quote.usd.is_none() {
            return Err(FeedError::MissingQuote(listing.slug.clone()));
        }
    }

    Ok(parsed.data)
}
