//! Watched asset identity and per-pass snapshot records.

use crate::UsdPrice;
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical asset identifier: the lowercase listing slug (e.g. "bitcoin").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AssetId(CompactString);

impl AssetId {
    /// Create an id from a slug, normalizing to lowercase.
    pub fn new(slug: &str) -> Self {
        Self(CompactString::new(slug.trim().to_lowercase()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl From<&str> for AssetId {
    fn from(slug: &str) -> Self {
        Self::new(slug)
    }
}

/// Snapshot of one tracked asset for a single evaluation pass.
/// Immutable once constructed; one instance per tracked asset per pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRecord {
    /// Canonical identifier (lowercase slug)
    pub id: AssetId,
    /// Display name (e.g., "Bitcoin")
    pub name: CompactString,
    /// Ticker symbol (e.g., "BTC")
    pub symbol: CompactString,
    /// Current USD price, rounded to 4 decimal places by the filter
    pub price: UsdPrice,
    /// Percent change over 1 hour, rounded to 2 decimal places
    pub change_1h: UsdPrice,
    /// Percent change over 24 hours, rounded to 2 decimal places
    pub change_24h: UsdPrice,
    /// Percent change over 7 days, rounded to 2 decimal places
    pub change_7d: UsdPrice,
}

impl AssetRecord {
    /// Create a record with zeroed percent changes.
    pub fn new(slug: &str, name: &str, symbol: &str, price: UsdPrice) -> Self {
        Self {
            id: AssetId::new(slug),
            name: CompactString::new(name),
            symbol: CompactString::new(symbol),
            price,
            change_1h: UsdPrice::ZERO,
            change_24h: UsdPrice::ZERO,
            change_7d: UsdPrice::ZERO,
        }
    }

    /// Set the percent-change columns (builder pattern).
    pub fn with_changes(mut self, h1: UsdPrice, h24: UsdPrice, d7: UsdPrice) -> Self {
        self.change_1h = h1;
        self.change_24h = h24;
        self.change_7d = d7;
        self
    }
}
