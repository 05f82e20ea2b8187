//! Marketplace event types.

use serde::{Deserialize, Serialize};

/// Events emitted by the marketplace service after its state changes.
///
/// The presentation layer listens to these to know when to re-read the
/// view; they carry counts, not the assets themselves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MarketplaceEvent {
    /// A refresh started; the view is loading.
    RefreshStarted { generation: u64 },

    /// A refresh committed a new canonical collection.
    AssetsReplaced {
        generation: u64,
        count: usize,
        visible: usize,
    },

    /// The most recent refresh failed. The previous collection stays.
    FetchFailed { generation: u64, message: String },

    /// Filter criteria changed and the visible subset was recomputed.
    FiltersChanged { visible: usize },
}

impl MarketplaceEvent {
    /// Creates a RefreshStarted event.
    pub fn refresh_started(generation: u64) -> Self {
        Self::RefreshStarted { generation }
    }

    /// Creates an AssetsReplaced event.
    pub fn assets_replaced(generation: u64, count: usize, visible: usize) -> Self {
        Self::AssetsReplaced {
            generation,
            count,
            visible,
        }
    }

    /// Creates a FetchFailed event.
    pub fn fetch_failed(generation: u64, message: impl Into<String>) -> Self {
        Self::FetchFailed {
            generation,
            message: message.into(),
        }
    }

    /// Creates a FiltersChanged event.
    pub fn filters_changed(visible: usize) -> Self {
        Self::FiltersChanged { visible }
    }

    /// Refresh generation this event belongs to. Filter changes have none.
    pub fn generation(&self) -> Option<u64> {
        match self {
            Self::RefreshStarted { generation }
            | Self::AssetsReplaced { generation, .. }
            | Self::FetchFailed { generation, .. } => Some(*generation),
            Self::FiltersChanged { .. } => None,
        }
    }

    /// Whether this event ends a refresh.
    pub fn is_refresh_outcome(&self) -> bool {
        matches!(self, Self::AssetsReplaced { .. } | Self::FetchFailed { .. })
    }
}
