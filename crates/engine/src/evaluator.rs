//! Threshold evaluation over a price snapshot.
//!
//! Pure function over an immutable snapshot and two threshold maps: no
//! I/O, no state across calls, idempotent. Cannot fail on well-typed
//! input; malformed listings are rejected upstream by the fetcher.

use pricewatch_core::{AlertDecision, AssetRecord, ThresholdMap};

/// Evaluate a snapshot against the buy and sell threshold maps.
///
/// For each record, in input order:
/// - BUY fires when the id is in the buy-map and `price <= level`;
/// - SELL fires when the id is in the sell-map and `price >= level`;
/// - both comparisons are inclusive, so landing exactly on a level triggers.
///
/// When both directions fire for the same asset in the same pass, BUY wins
/// and the SELL is suppressed. This is a deliberate fixed policy, kept from
/// the behavior the thresholds were tuned against.
///
/// Output decisions preserve the input record order, at most one per asset.
pub fn evaluate(
    records: &[AssetRecord],
    buy: &ThresholdMap,
    sell: &ThresholdMap,
) -> Vec<AlertDecision> {
    let mut decisions = Vec::new();

    for record in records {
        let buy_hit = buy.get(&record.id).filter(|&level| record.price <= level);
        let sell_hit = sell.get(&record.id).filter(|&level| record.price >= level);

        match (buy_hit, sell_hit) {
            // BUY takes precedence over a simultaneous SELL
            (Some(level), _) => decisions.push(AlertDecision::buy(record, level)),
            (None, Some(level)) => decisions.push(AlertDecision::sell(record, level)),
            (None, None) => {}
        }
    }

    decisions
}
