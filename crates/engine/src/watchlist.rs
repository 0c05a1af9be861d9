//! Watch-list filtering of raw listings.
//!
//! Reduces the full fetched snapshot to the configured set of tracked
//! assets, projected into normalized `AssetRecord` rows.

use pricewatch_core::{AssetId, AssetRecord, UsdPrice};
use pricewatch_feeds::Listing;
use std::collections::HashSet;
use tracing::debug;

/// Decimal places kept on prices after filtering.
pub const PRICE_DECIMALS: u32 = 4;
/// Decimal places kept on percent changes after filtering.
pub const CHANGE_DECIMALS: u32 = 2;

/// The fixed set of asset identifiers the operator wants monitored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Watchlist(HashSet<AssetId>);

impl Watchlist {
    pub fn new<'a, I>(slugs: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self(slugs.into_iter().map(AssetId::new).collect())
    }

    #[inline]
    pub fn contains(&self, id: &AssetId) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AssetId> {
        self.0.iter()
    }
}

/// Filter a fetched snapshot down to the watch-list.
///
/// Keeps listing order, normalizes each kept listing into an
/// `AssetRecord` with the price rounded to 4 decimal places and percent
/// changes to 2. An empty result is a valid outcome, not an error; the
/// evaluator then performs zero evaluations.
pub fn filter_listings(listings: &[Listing], watchlist: &Watchlist) -> Vec<AssetRecord> {
    let records: Vec<AssetRecord> = listings
        .iter()
        .filter_map(|listing| {
            let id = AssetId::new(&listing.slug);
            if !watchlist.contains(&id) {
                return None;
            }
            let usd = listing.quote.usd.as_ref()?;

            Some(
                AssetRecord::new(
                    &listing.slug,
                    &listing.name,
                    &listing.symbol,
                    UsdPrice::from_f64(usd.price).round_dp(PRICE_DECIMALS),
                )
                .with_changes(
                    UsdPrice::from_f64(usd.percent_change_1h).round_dp(CHANGE_DECIMALS),
                    UsdPrice::from_f64(usd.percent_change_24h).round_dp(CHANGE_DECIMALS),
                    UsdPrice::from_f64(usd.percent_change_7d).round_dp(CHANGE_DECIMALS),
                ),
            )
        })
        .collect();

    debug!(
        matched = records.len(),
        fetched = listings.len(),
        "Filtered snapshot to watch-list"
    );
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn listing(slug: &str, name: &str, symbol: &str, price: f64) -> Listing {
        let json = serde_json::json!({
            "name": name,
            "symbol": symbol,
            "slug": slug,
            "quote": {
                "USD": {
                    "price": price,
                    "percent_change_1h": 0.123,
                    "percent_change_24h": -1.005,
                    "percent_change_7d": 4.0,
                }
            }
        });
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_filter_keeps_only_watchlisted() {
        let listings = vec![
            listing("bitcoin", "Bitcoin", "BTC", 80000.0),
            listing("dogecoin", "Dogecoin", "DOGE", 0.1),
            listing("xrp", "XRP", "XRP", 2.5),
        ];
        let watchlist = Watchlist::new(["bitcoin", "xrp"]);

        let records = filter_listings(&listings, &watchlist);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id.as_str(), "bitcoin");
        assert_eq!(records[1].id.as_str(), "xrp");
    }

    #[test]
    fn test_filter_preserves_listing_order() {
        let listings = vec![
            listing("xrp", "XRP", "XRP", 2.5),
            listing("bitcoin", "Bitcoin", "BTC", 80000.0),
        ];
        let watchlist = Watchlist::new(["bitcoin", "xrp"]);

        let records = filter_listings(&listings, &watchlist);
        assert_eq!(records[0].id.as_str(), "xrp");
        assert_eq!(records[1].id.as_str(), "bitcoin");
    }

    #[test]
    fn test_filter_rounds_price_and_changes() {
        let listings = vec![listing("cardano", "Cardano", "ADA", 0.123456)];
        let watchlist = Watchlist::new(["cardano"]);

        let records = filter_listings(&listings, &watchlist);
        let record = &records[0];
        assert_eq!(record.price, UsdPrice::from_f64(0.1235));
        assert_eq!(record.change_1h, UsdPrice::from_f64(0.12));
        assert_eq!(record.change_24h, UsdPrice::from_f64(-1.01));
        assert_eq!(record.change_7d, UsdPrice::from_f64(4.0));
    }

    #[test]
    fn test_empty_intersection_is_not_an_error() {
        let listings = vec![listing("dogecoin", "Dogecoin", "DOGE", 0.1)];
        let watchlist = Watchlist::new(["bitcoin"]);

        let records = filter_listings(&listings, &watchlist);
        assert!(records.is_empty());
    }

    #[test]
    fn test_empty_snapshot_yields_empty() {
        let watchlist = Watchlist::new(["bitcoin"]);
        assert!(filter_listings(&[], &watchlist).is_empty());
    }
}
