use std::sync::Arc;

use closet_market_data::AssetDetail;
use serde::Serialize;

use super::criteria::FilterCriteria;
use super::facets::FacetIndex;
use super::store::Generation;

/// Result of a refresh call.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RefreshOutcome {
    /// This call's result became the canonical collection.
    Committed { generation: Generation, count: usize },
    /// A newer refresh started before this one finished; its result was dropped.
    Superseded { generation: Generation },
}

impl RefreshOutcome {
    pub fn generation(&self) -> Generation {
        match self {
            Self::Committed { generation, .. } | Self::Superseded { generation } => *generation,
        }
    }

    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed { .. })
    }
}

/// Everything the presentation layer renders, read in one go.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceView {
    /// Canonical collection
    pub assets: Arc<Vec<AssetDetail>>,

    /// Subset passing the current criteria
    pub visible: Arc<Vec<AssetDetail>>,

    pub facets: Arc<FacetIndex>,

    pub criteria: FilterCriteria,

    /// True while the most recent refresh is in flight
    pub is_loading: bool,

    /// User-visible error from the most recent refresh, if it failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MarketplaceView {
    /// Nothing to show and nothing loading: the "no matches" state.
    pub fn has_no_matches(&self) -> bool {
        !self.is_loading && self.visible.is_empty()
    }
}
