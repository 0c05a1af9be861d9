//! Market-data fetching from the CoinMarketCap REST API.

pub mod client;
pub mod error;
pub mod listing;

pub use client::CmcClient;
pub use error::FeedError;
pub use listing::{ApiStatus, Listing, ListingsResponse, UsdQuote};
