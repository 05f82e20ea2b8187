//! Distinct facet values offered for selection.

use std::collections::BTreeSet;

use closet_market_data::AssetDetail;
use serde::Serialize;

use super::criteria::Facet;

/// Selectable values per facet, derived from the current asset collection.
///
/// Always rebuilt from the full collection, so values disappear with the last
/// asset carrying them. Blank values are left out; their assets are not.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FacetIndex {
    pub collections: BTreeSet<String>,
    pub years: BTreeSet<String>,
    pub designers: BTreeSet<String>,
}

impl FacetIndex {
    pub fn from_assets(assets: &[AssetDetail]) -> Self {
        let mut index = Self::default();
        for asset in assets {
            for facet in Facet::ALL {
                if let Some(value) = facet.value_of(asset).filter(|v| !v.trim().is_empty()) {
                    index.values_mut(facet).insert(value.to_string());
                }
            }
        }
        index
    }

    pub fn values(&self, facet: Facet) -> &BTreeSet<String> {
        match facet {
            Facet::Collection => &self.collections,
            Facet::Year => &self.years,
            Facet::Designer => &self.designers,
        }
    }

    fn values_mut(&mut self, facet: Facet) -> &mut BTreeSet<String> {
        match facet {
            Facet::Collection => &mut self.collections,
            Facet::Year => &mut self.years,
            Facet::Designer => &mut self.designers,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty() && self.years.is_empty() && self.designers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(mint: &str) -> AssetDetail {
        AssetDetail::new("Item", "CLST", mint, "Seller", "1", format!("List{}", mint))
    }

    #[test]
    fn test_collects_distinct_values() {
        let assets = vec![
            asset("M1").collection("A").year("2020").designer("Ada"),
            asset("M2").collection("B").year("2020"),
            asset("M3").collection("A").designer("Grace"),
        ];

        let index = FacetIndex::from_assets(&assets);

        assert_eq!(index.collections.iter().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(index.years.iter().collect::<Vec<_>>(), vec!["2020"]);
        assert_eq!(
            index.designers.iter().collect::<Vec<_>>(),
            vec!["Ada", "Grace"]
        );
    }

    #[test]
    fn test_skips_blank_values() {
        let assets = vec![
            asset("M1").collection("").year("   "),
            asset("M2").designer("\t"),
            asset("M3"),
        ];

        let index = FacetIndex::from_assets(&assets);
        assert!(index.is_empty());
    }

    #[test]
    fn test_keeps_untrimmed_value_text() {
        let assets = vec![asset("M1").collection(" Winter ")];
        let index = FacetIndex::from_assets(&assets);
        assert!(index.values(Facet::Collection).contains(" Winter "));
    }
}
