//! Watch-list filtering and threshold evaluation.

pub mod evaluator;
pub mod watchlist;

pub use evaluator::evaluate;
pub use watchlist::{filter_listings, Watchlist, CHANGE_DECIMALS, PRICE_DECIMALS};
