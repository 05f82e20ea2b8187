//! Listing source trait definition.
//!
//! This module defines the `ListingSource` trait the marketplace engine uses
//! to reach the on-chain listing program.

use async_trait::async_trait;

use crate::errors::ListingSourceError;
use crate::models::{Address, Amount, AssetDetail, ListingRecord};

use super::context::{Connection, ProviderHandle};

/// Trait for clients of the marketplace listing program.
///
/// Implement this trait to plug a concrete RPC client into the engine.
/// Both calls are independent network round trips; the engine may issue
/// many `resolve_detail` calls concurrently.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use closet_market_data::{ListingSource, ListingSourceError};
///
/// struct RpcListingSource {
///     program_id: Address,
/// }
///
/// #[async_trait]
/// impl ListingSource for RpcListingSource {
///     fn id(&self) -> &'static str {
///         "RPC"
///     }
///
///     async fn list_listings(
///         &self,
///         provider: &ProviderHandle,
///         connection: &Connection,
///     ) -> Result<Vec<ListingRecord>, ListingSourceError> {
///         // getProgramAccounts + decode
///     }
///
///     // ... implement resolve_detail
/// }
/// ```
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Identifier used in logs.
    fn id(&self) -> &'static str {
        "LISTING_SOURCE"
    }

    /// Fetch every listing account of the program, active and inactive.
    ///
    /// # Arguments
    ///
    /// * `provider` - Program client wrapper (may be read-only)
    /// * `connection` - RPC connection to read from
    async fn list_listings(
        &self,
        provider: &ProviderHandle,
        connection: &Connection,
    ) -> Result<Vec<ListingRecord>, ListingSourceError>;

    /// Resolve one mint's metadata and merge it with its listing fields.
    ///
    /// # Arguments
    ///
    /// * `mint` - Mint to resolve
    /// * `connection` - RPC connection to read from
    /// * `seller` - Seller recorded on the listing
    /// * `price` - Listing price in base units
    /// * `listing_account` - Address of the listing account
    ///
    /// # Returns
    ///
    /// The enriched asset, or `MetadataNotFound` when the mint has no usable
    /// metadata.
    async fn resolve_detail(
        &self,
        mint: &Address,
        connection: &Connection,
        seller: &Address,
        price: Amount,
        listing_account: &Address,
    ) -> Result<AssetDetail, ListingSourceError>;
}
