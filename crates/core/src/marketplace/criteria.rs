//! Filter criteria owned by the presentation layer.

use std::collections::HashSet;

use closet_market_data::AssetDetail;
use num_traits::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Taxonomy fields a user can narrow the listings by.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facet {
    Collection,
    Year,
    Designer,
}

impl Facet {
    pub const ALL: [Facet; 3] = [Facet::Collection, Facet::Year, Facet::Designer];

    /// The asset's value for this facet, if it has one.
    pub fn value_of(self, asset: &AssetDetail) -> Option<&str> {
        match self {
            Self::Collection => asset.collection.as_deref(),
            Self::Year => asset.year.as_deref(),
            Self::Designer => asset.designer.as_deref(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Collection => "Collection",
            Self::Year => "Year",
            Self::Designer => "Designer",
        }
    }
}

/// Inclusive price bounds.
///
/// A bound that is not a finite number (NaN, ±∞) is not applied, which is
/// what an empty or cleared numeric input produces.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn unbounded() -> Self {
        Self::new(f64::NEG_INFINITY, f64::INFINITY)
    }

    /// Lower bound to test against, if finite.
    pub fn min_bound(&self) -> Option<Decimal> {
        to_bound(self.min)
    }

    /// Upper bound to test against, if finite.
    pub fn max_bound(&self) -> Option<Decimal> {
        to_bound(self.max)
    }

    pub fn is_unbounded(&self) -> bool {
        self.min_bound().is_none() && self.max_bound().is_none()
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Finite bounds outside the decimal range saturate to its extremes.
fn to_bound(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_f64(value).or(Some(if value > 0.0 {
        Decimal::MAX
    } else {
        Decimal::MIN
    }))
}

/// Active filters. An empty selection set leaves that facet unrestricted.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub price_range: PriceRange,
    pub collections: HashSet<String>,
    pub years: HashSet<String>,
    pub designers: HashSet<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_price_range(mut self, min: f64, max: f64) -> Self {
        self.price_range = PriceRange::new(min, max);
        self
    }

    pub fn with_selected(mut self, facet: Facet, value: impl Into<String>) -> Self {
        self.selection_mut(facet).insert(value.into());
        self
    }

    pub fn selection(&self, facet: Facet) -> &HashSet<String> {
        match facet {
            Facet::Collection => &self.collections,
            Facet::Year => &self.years,
            Facet::Designer => &self.designers,
        }
    }

    fn selection_mut(&mut self, facet: Facet) -> &mut HashSet<String> {
        match facet {
            Facet::Collection => &mut self.collections,
            Facet::Year => &mut self.years,
            Facet::Designer => &mut self.designers,
        }
    }

    /// Select `value` if it isn't selected, deselect it otherwise.
    ///
    /// Returns `true` when the value is selected afterwards.
    pub fn toggle(&mut self, facet: Facet, value: &str) -> bool {
        let selection = self.selection_mut(facet);
        if selection.remove(value) {
            false
        } else {
            selection.insert(value.to_string());
            true
        }
    }

    pub fn is_selected(&self, facet: Facet, value: &str) -> bool {
        self.selection(facet).contains(value)
    }

    pub fn set_price_range(&mut self, min: f64, max: f64) {
        self.price_range = PriceRange::new(min, max);
    }

    pub fn set_min_price(&mut self, min: f64) {
        self.price_range.min = min;
    }

    pub fn set_max_price(&mut self, max: f64) {
        self.price_range.max = max;
    }

    /// True when no constraint would hide any asset.
    pub fn is_unrestricted(&self) -> bool {
        self.price_range.is_unbounded() && Facet::ALL.iter().all(|f| self.selection(*f).is_empty())
    }
}
