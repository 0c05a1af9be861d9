//! Core data types for the price watch service.

pub mod alert;
pub mod asset;
pub mod price;
pub mod threshold;

pub use alert::*;
pub use asset::*;
pub use price::*;
pub use threshold::*;
