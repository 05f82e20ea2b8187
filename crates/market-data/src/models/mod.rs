//! Marketplace data models
//!
//! This module contains the data types exchanged with the listing program:
//! - `types` - On-chain identifiers (Address, Amount)
//! - `listing` - Raw listing accounts (ListingRecord)
//! - `price` - Decimal listing price (Price)
//! - `asset` - Enriched, display-ready assets (AssetDetail)

mod asset;
mod listing;
mod price;
mod types;

pub use asset::AssetDetail;
pub use listing::ListingRecord;
pub use price::Price;
pub use types::{Address, Amount};
