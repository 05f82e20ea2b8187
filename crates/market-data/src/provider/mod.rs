//! Listing program access.
//!
//! This module contains:
//! - The `ListingSource` trait concrete program clients implement
//! - The chain context, connection and provider wrapper passed to it
//!
//! No concrete RPC client lives in this crate; the engine only depends on
//! the trait.

mod context;
mod traits;

pub use context::{ChainContext, Commitment, Connection, ProviderHandle};
pub use traits::ListingSource;
