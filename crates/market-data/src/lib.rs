//! Closet Market Data Crate
//!
//! This crate is the boundary between the marketplace engine and the
//! on-chain listing program.
//!
//! # Overview
//!
//! ```text
//! +------------------+     +------------------+
//! |   ChainContext   | --> |  ProviderHandle  |  (connection + optional wallet)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |  ListingSource   |  (program client)
//!                          +------------------+
//!                             |            |
//!                             v            v
//!                  +---------------+  +---------------+
//!                  | ListingRecord |  |  AssetDetail  |
//!                  +---------------+  +---------------+
//! ```
//!
//! # Core Types
//!
//! - [`Address`] - Base58 on-chain public key
//! - [`ListingRecord`] - Raw listing account
//! - [`AssetDetail`] - Mint metadata merged with its listing
//! - [`Price`] - Decimal price parsed once at the boundary
//! - [`ChainContext`] - Connection and signer identity
//! - [`ListingSource`] - Trait implemented by program clients

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::ListingSourceError;

pub use models::{Address, Amount, AssetDetail, ListingRecord, Price};

pub use provider::{ChainContext, Commitment, Connection, ListingSource, ProviderHandle};
