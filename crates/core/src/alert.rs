//! Alert decisions produced by the threshold evaluator.

use crate::{AssetRecord, UsdPrice};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a triggered threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Price fell to or below the buy level
    Buy,
    /// Price rose to or above the sell level
    Sell,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Buy => f.write_str("BUY"),
            Direction::Sell => f.write_str("SELL"),
        }
    }
}

/// One triggered condition for one asset in one evaluation pass.
/// Consumed immediately by the notifier; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertDecision {
    /// Asset identifier (lowercase slug)
    pub id: crate::AssetId,
    /// Display name for message rendering
    pub name: CompactString,
    /// Triggered direction
    pub direction: Direction,
    /// Current price at evaluation time
    pub price: UsdPrice,
    /// The configured level that was crossed
    pub threshold: UsdPrice,
    /// Distance past the level: threshold - price for Buy,
    /// price - threshold for Sell. Non-negative by construction.
    pub magnitude: UsdPrice,
}

impl AlertDecision {
    /// Build a BUY decision. Caller guarantees `record.price <= threshold`.
    pub fn buy(record: &AssetRecord, threshold: UsdPrice) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            direction: Direction::Buy,
            price: record.price,
            threshold,
            magnitude: threshold - record.price,
        }
    }

    /// Build a SELL decision. Caller guarantees `record.price >= threshold`.
    pub fn sell(record: &AssetRecord, threshold: UsdPrice) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            direction: Direction::Sell,
            price: record.price,
            threshold,
            magnitude: record.price - threshold,
        }
    }
}
