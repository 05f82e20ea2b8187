//! Filter engine applied to the canonical asset collection.
//!
//! Pure and total: it never fails and never touches the network. Every
//! constraint is conjunctive, and output keeps input order.

use closet_market_data::AssetDetail;
use rust_decimal::Decimal;

use super::criteria::{Facet, FilterCriteria};

/// Return the assets that satisfy every active constraint in `criteria`.
pub fn apply(assets: &[AssetDetail], criteria: &FilterCriteria) -> Vec<AssetDetail> {
    let min = criteria.price_range.min_bound();
    let max = criteria.price_range.max_bound();

    assets
        .iter()
        .filter(|asset| within_price(asset, min, max) && matches_facets(asset, criteria))
        .cloned()
        .collect()
}

/// Whether a single asset passes `criteria`.
pub fn matches(asset: &AssetDetail, criteria: &FilterCriteria) -> bool {
    within_price(
        asset,
        criteria.price_range.min_bound(),
        criteria.price_range.max_bound(),
    ) && matches_facets(asset, criteria)
}

/// A price with no numeric value only fails when a bound is actually tested.
fn within_price(asset: &AssetDetail, min: Option<Decimal>, max: Option<Decimal>) -> bool {
    if min.is_none() && max.is_none() {
        return true;
    }
    let Some(price) = asset.price.value() else {
        return false;
    };
    min.map_or(true, |min| price >= min) && max.map_or(true, |max| price <= max)
}

fn matches_facets(asset: &AssetDetail, criteria: &FilterCriteria) -> bool {
    Facet::ALL.iter().all(|facet| {
        let selection = criteria.selection(*facet);
        selection.is_empty() || selection.contains(facet.value_of(asset).unwrap_or(""))
    })
}
