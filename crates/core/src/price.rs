//! Fixed-point USD amounts.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Signed fixed-point number with 8 decimal places.
/// Used for prices, thresholds, and percent changes without floating-point
/// comparison surprises. Signed because percent changes go negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UsdPrice(pub i64);

impl UsdPrice {
    /// Number of decimal places
    pub const DECIMALS: u32 = 8;
    /// Scale factor: 10^8
    pub const SCALE: i64 = 100_000_000;

    pub const ZERO: UsdPrice = UsdPrice(0);

    /// Create from f64 (API payloads and configuration literals).
    pub fn from_f64(value: f64) -> Self {
        Self((value * Self::SCALE as f64).round() as i64)
    }

    /// Convert to f64 (for display/formatting).
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / Self::SCALE as f64
    }

    /// Round to `dp` decimal places, half away from zero.
    pub fn round_dp(self, dp: u32) -> Self {
        debug_assert!(dp <= Self::DECIMALS);
        let factor = 10i64.pow(Self::DECIMALS - dp);
        let half = factor / 2;
        let rounded = if self.0 >= 0 {
            (self.0 + half) / factor
        } else {
            (self.0 - half) / factor
        };
        Self(rounded * factor)
    }

    /// Check if this amount is negative.
    #[inline]
    pub fn is_negative(self) -> bool {
        self.0 < 0
    }
}

impl Add for UsdPrice {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for UsdPrice {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}
