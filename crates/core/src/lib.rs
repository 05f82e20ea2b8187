//! Closet Core - Marketplace listing aggregation and filtering.
//!
//! This crate turns the listing program's accounts into a canonical,
//! filterable asset collection. It talks to the chain only through the
//! `ListingSource` trait from the `closet-market-data` crate.

pub mod constants;
pub mod errors;
pub mod events;
pub mod marketplace;
pub mod settings;

// Re-export the engine surface
pub use marketplace::*;

// Re-export settings
pub use settings::MarketplaceConfig;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
