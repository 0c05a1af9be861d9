//! Error types for market-data fetching.

use thiserror::Error;

/// Errors that can occur while fetching the price snapshot.
/// Any of these skips the whole evaluation pass; there is no partial
/// evaluation of a broken snapshot.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CoinMarketCap API error {code}: {message}")]
    Api { code: i64, message: String },

    #[error("Failed to decode listings response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Listing '{0}' is missing a USD quote")]
    MissingQuote(String),
}

impl FeedError {
    /// Returns true if this error is transient and likely to succeed on the
    /// next scheduled pass.
    pub fn is_transient(&self) -> bool {
        match self {
            FeedError::Http(_) => true,
            // 1008 is the CMC rate-limit error code
            FeedError::Api { code, .. } => *code == 1008,
            FeedError::Decode(_) | FeedError::MissingQuote(_) => false,
        }
    }
}
