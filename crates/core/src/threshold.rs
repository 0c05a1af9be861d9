//! Operator-configured price thresholds.

use crate::{AssetId, UsdPrice};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mapping from asset identifier to a trigger price level.
/// Two independent instances exist per evaluation pass: a buy-map (alert
/// when price falls to or below the level) and a sell-map (alert when price
/// rises to or above the level). Static for the process lifetime.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThresholdMap(HashMap<AssetId, UsdPrice>);

impl ThresholdMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the level for an asset, replacing any previous level.
    pub fn insert(&mut self, id: AssetId, level: UsdPrice) {
        self.0.insert(id, level);
    }

    /// Get the level for an asset. Ids not present are simply not
    /// evaluated against this direction.
    #[inline]
    pub fn get(&self, id: &AssetId) -> Option<UsdPrice> {
        self.0.get(id).copied()
    }

    #[inline]
    pub fn contains(&self, id: &AssetId) -> bool {
        self.0.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AssetId, &UsdPrice)> {
        self.0.iter()
    }
}

impl FromIterator<(AssetId, UsdPrice)> for ThresholdMap {
    fn from_iter<I: IntoIterator<Item = (AssetId, UsdPrice)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
