//! Listing resolver.
//!
//! Turns the listing program's raw accounts into the canonical asset
//! collection:
//!
//! 1. List every listing account through the [`ListingSource`]
//! 2. Keep the active ones
//! 3. Resolve each mint's detail concurrently
//! 4. Join all resolutions, failing the whole run on the first error
//! 5. Derive the facet index from the resulting collection

use std::sync::Arc;

use closet_market_data::{AssetDetail, ChainContext, ListingRecord, ListingSource};
use futures::future::try_join_all;
use log::{debug, info, warn};

use super::facets::FacetIndex;
use crate::errors::{Error, Result};

/// Output of one successful resolver run.
///
/// The facet index is always derived from exactly `assets`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedListings {
    pub assets: Vec<AssetDetail>,
    pub facets: FacetIndex,
}

impl ResolvedListings {
    pub fn new(assets: Vec<AssetDetail>) -> Self {
        let facets = FacetIndex::from_assets(&assets);
        Self { assets, facets }
    }
}

/// Resolves active listings into asset details.
pub struct ListingResolver {
    source: Arc<dyn ListingSource>,
}

impl ListingResolver {
    pub fn new(source: Arc<dyn ListingSource>) -> Self {
        Self { source }
    }

    /// Run the full fetch and resolve pipeline for `context`.
    ///
    /// All-or-nothing: if any mint fails to resolve, the call fails and no
    /// partial collection is returned. Sibling requests still in flight are
    /// dropped with the joined future.
    pub async fn resolve(&self, context: &ChainContext) -> Result<ResolvedListings> {
        let provider = context.provider();
        let connection = &context.connection;

        let listings = self
            .source
            .list_listings(&provider, connection)
            .await
            .map_err(|e| {
                warn!(
                    "Listing fetch from '{}' failed for {} (transient: {}): {}",
                    self.source.id(),
                    context,
                    e.is_transient(),
                    e
                );
                Error::Fetch(e)
            })?;

        let total = listings.len();
        let active: Vec<ListingRecord> = listings.into_iter().filter(|l| l.is_active).collect();
        debug!(
            "Fetched {} listings from '{}', {} active",
            total,
            self.source.id(),
            active.len()
        );

        let resolutions = active.iter().map(|listing| async move {
            self.source
                .resolve_detail(
                    &listing.mint,
                    connection,
                    &listing.seller,
                    listing.price,
                    &listing.listing_account,
                )
                .await
                .map_err(|e| {
                    warn!(
                        "Detail resolution failed for mint {} (transient: {}): {}",
                        listing.mint,
                        e.is_transient(),
                        e
                    );
                    Error::Resolution {
                        mint: listing.mint.clone(),
                        source: e,
                    }
                })
        });

        let assets = try_join_all(resolutions).await?;
        let resolved = ResolvedListings::new(assets);

        info!(
            "Resolved {} assets for {} ({} collections, {} years, {} designers)",
            resolved.assets.len(),
            context,
            resolved.facets.collections.len(),
            resolved.facets.years.len(),
            resolved.facets.designers.len()
        );

        Ok(resolved)
    }
}
