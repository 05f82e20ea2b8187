//! Property-based integration tests for the filter engine and facet index.
//!
//! These tests verify that universal properties hold across all valid inputs,
//! using the `proptest` crate for random test case generation.

use closet_core::marketplace::filter::matches;
use closet_core::{apply, Facet, FacetIndex, FilterCriteria};
use closet_market_data::AssetDetail;
use proptest::prelude::*;
use std::collections::HashMap;

// =============================================================================
// Generators
// =============================================================================

/// Generates a facet value, blank values included.
fn arb_facet_value() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(prop_oneof![
        Just(String::new()),
        Just("  ".to_string()),
        "[A-C][a-z]{0,3}",
    ])
}

/// Generates a price string, mostly numeric.
fn arb_price() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => (0u32..5000).prop_map(|p| p.to_string()),
        1 => (0u32..5000, 0u32..100).prop_map(|(p, c)| format!("{}.{:02}", p, c)),
        1 => Just("N/A".to_string()),
    ]
}

/// Generates an asset with a unique mint.
fn arb_asset(index: usize) -> impl Strategy<Value = AssetDetail> {
    (arb_price(), arb_facet_value(), arb_facet_value(), arb_facet_value()).prop_map(
        move |(price, collection, year, designer)| {
            let mint = format!("Mint{}", index);
            let mut asset = AssetDetail::new(
                format!("Item {}", index),
                "CLST",
                mint.as_str(),
                "Seller",
                price.as_str(),
                format!("List{}", mint),
            );
            asset.collection = collection;
            asset.year = year;
            asset.designer = designer;
            asset
        },
    )
}

/// Generates a collection of assets with distinct mints.
fn arb_assets(max_count: usize) -> impl Strategy<Value = Vec<AssetDetail>> {
    (0..=max_count).prop_flat_map(|count| (0..count).map(arb_asset).collect::<Vec<_>>())
}

/// Generates a bound that is not applied.
fn arb_open_bound() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
    ]
}

/// Generates a price bound, finite or not.
fn arb_bound(finite: std::ops::Range<f64>) -> impl Strategy<Value = f64> {
    prop_oneof![
        3 => finite,
        1 => arb_open_bound(),
        1 => Just(1e40),
    ]
}

/// Generates a facet selection, the empty string included.
fn arb_selection() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(
        prop_oneof![Just(String::new()), "[A-C][a-z]{0,3}"],
        0..3,
    )
}

/// Generates criteria with any bounds and selections on every facet.
fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
    (
        arb_bound(0.0..3000.0),
        arb_bound(1000.0..6000.0),
        arb_selection(),
        arb_selection(),
        arb_selection(),
    )
        .prop_map(|(min, max, collections, years, designers)| {
            let mut criteria = FilterCriteria::new();
            criteria.set_price_range(min, max);
            for (facet, values) in [
                (Facet::Collection, collections),
                (Facet::Year, years),
                (Facet::Designer, designers),
            ] {
                for value in values {
                    criteria.toggle(facet, &value);
                }
            }
            criteria
        })
}

fn mints(assets: &[AssetDetail]) -> Vec<String> {
    assets.iter().map(|a| a.mint.to_string()).collect()
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Empty criteria with no bounds keep every asset, in order.
    #[test]
    fn prop_unrestricted_criteria_is_identity(assets in arb_assets(12)) {
        let visible = apply(&assets, &FilterCriteria::new());
        prop_assert_eq!(visible, assets);
    }

    /// Bounds that are NaN or infinite are not applied.
    #[test]
    fn prop_open_bounds_are_identity(
        assets in arb_assets(12),
        min in arb_open_bound(),
        max in arb_open_bound(),
    ) {
        let criteria = FilterCriteria::new().with_price_range(min, max);
        prop_assert_eq!(apply(&assets, &criteria), assets);
    }

    /// Selecting "" keeps exactly the assets without that facet.
    #[test]
    fn prop_empty_selection_matches_missing_value(assets in arb_assets(12)) {
        let criteria = FilterCriteria::new().with_selected(Facet::Designer, "");
        let visible = apply(&assets, &criteria);
        let expected: Vec<AssetDetail> = assets
            .iter()
            .filter(|a| a.designer.as_deref().unwrap_or("").is_empty())
            .cloned()
            .collect();
        prop_assert_eq!(visible, expected);
    }

    /// Filtering the filtered output changes nothing.
    #[test]
    fn prop_apply_is_idempotent(assets in arb_assets(12), criteria in arb_criteria()) {
        let once = apply(&assets, &criteria);
        let twice = apply(&once, &criteria);
        prop_assert_eq!(once, twice);
    }

    /// Output is exactly the matching assets, in their original order.
    #[test]
    fn prop_apply_is_stable_subset(assets in arb_assets(12), criteria in arb_criteria()) {
        let visible = apply(&assets, &criteria);
        let expected: Vec<AssetDetail> = assets
            .iter()
            .filter(|a| matches(a, &criteria))
            .cloned()
            .collect();
        prop_assert_eq!(mints(&visible), mints(&expected));
    }

    /// Restricting an unrestricted facet never adds assets.
    #[test]
    fn prop_extra_constraint_never_widens(
        assets in arb_assets(12),
        criteria in arb_criteria(),
        designer in "[A-C][a-z]{0,3}",
    ) {
        let mut base = criteria;
        base.designers.clear();
        let before = apply(&assets, &base);
        let narrowed = base.clone().with_selected(Facet::Designer, designer);
        let after = apply(&assets, &narrowed);

        prop_assert!(after.len() <= before.len());
        for asset in &after {
            prop_assert!(before.contains(asset));
        }
    }

    /// Facets hold every non-blank value exactly once and nothing else.
    #[test]
    fn prop_facets_cover_non_blank_values(assets in arb_assets(12)) {
        let index = FacetIndex::from_assets(&assets);

        for facet in Facet::ALL {
            let mut counts: HashMap<&str, usize> = HashMap::new();
            for asset in &assets {
                if let Some(value) = facet.value_of(asset) {
                    if !value.trim().is_empty() {
                        *counts.entry(value).or_default() += 1;
                    }
                }
            }

            let values = index.values(facet);
            prop_assert_eq!(values.len(), counts.len());
            for value in values {
                prop_assert!(!value.trim().is_empty());
                prop_assert!(counts.contains_key(value.as_str()));
            }
        }
    }
}
