//! Marketplace service.
//!
//! Owns the canonical collection and the filter state, and is the only
//! surface the presentation layer talks to:
//! - Refresh on context change (via the listing resolver)
//! - Read-only access to assets, facets and the visible subset
//! - Filter criteria mutators, each re-applying the filter synchronously

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use closet_market_data::{AssetDetail, ChainContext, ListingSource};
use log::{debug, info, warn};

use super::criteria::{Facet, FilterCriteria};
use super::facets::FacetIndex;
use super::filter;
use super::resolver::ListingResolver;
use super::store::{CanonicalStore, Generation};
use super::view::{MarketplaceView, RefreshOutcome};
use crate::errors::Result;
use crate::events::{MarketplaceEvent, MarketplaceEventSink, NoOpEventSink};
use crate::settings::MarketplaceConfig;

/// Presentation-facing marketplace operations.
#[async_trait]
pub trait MarketplaceServiceTrait: Send + Sync {
    // =========================================================================
    // Resolver
    // =========================================================================

    /// Re-run the resolver for `context`.
    ///
    /// Fails with the resolver error when this call is still the most recent
    /// one; a superseded call returns [`RefreshOutcome::Superseded`] whatever
    /// its own result was.
    async fn refresh(&self, context: &ChainContext) -> Result<RefreshOutcome>;

    /// Called when the wallet or connection changes.
    async fn on_context_change(&self, context: &ChainContext) -> Result<RefreshOutcome>;

    // =========================================================================
    // Read side
    // =========================================================================

    fn assets(&self) -> Arc<Vec<AssetDetail>>;

    fn facets(&self) -> Arc<FacetIndex>;

    fn visible_assets(&self) -> Arc<Vec<AssetDetail>>;

    fn criteria(&self) -> FilterCriteria;

    fn is_loading(&self) -> bool;

    fn error(&self) -> Option<String>;

    fn snapshot(&self) -> MarketplaceView;

    // =========================================================================
    // Criteria mutators
    // =========================================================================

    /// Toggle one facet value. Returns whether it is now selected.
    fn toggle(&self, facet: Facet, value: &str) -> bool;

    fn set_price_range(&self, min: f64, max: f64);

    fn set_min_price(&self, min: f64);

    fn set_max_price(&self, max: f64);

    /// Reset criteria to the configured initial state.
    fn clear_filters(&self);
}

/// Client-side view state, independent of refresh cycles.
#[derive(Debug)]
struct ViewState {
    criteria: FilterCriteria,
    visible: Arc<Vec<AssetDetail>>,
    is_loading: bool,
    error: Option<String>,
}

pub struct MarketplaceService {
    resolver: ListingResolver,
    store: CanonicalStore,
    state: RwLock<ViewState>,
    config: MarketplaceConfig,
    event_sink: Arc<dyn MarketplaceEventSink>,
}

impl MarketplaceService {
    pub fn new(source: Arc<dyn ListingSource>, config: MarketplaceConfig) -> Self {
        let state = ViewState {
            criteria: config.initial_criteria(),
            visible: Arc::new(Vec::new()),
            is_loading: false,
            error: None,
        };
        Self {
            resolver: ListingResolver::new(source),
            store: CanonicalStore::new(),
            state: RwLock::new(state),
            config,
            event_sink: Arc::new(NoOpEventSink),
        }
    }

    pub fn with_event_sink(mut self, event_sink: Arc<dyn MarketplaceEventSink>) -> Self {
        self.event_sink = event_sink;
        self
    }

    pub fn config(&self) -> &MarketplaceConfig {
        &self.config
    }

    /// Issued under the state lock so loading flags follow generation order.
    fn begin_refresh(&self) -> Generation {
        let generation = {
            let mut state = self.write_state();
            state.is_loading = true;
            self.store.begin()
        };
        self.event_sink
            .emit(MarketplaceEvent::refresh_started(generation.value()));
        generation
    }

    /// Mutate the criteria and recompute the visible subset in one step.
    fn update_criteria<T>(&self, update: impl FnOnce(&mut FilterCriteria) -> T) -> T {
        let (result, visible) = {
            let mut state = self.write_state();
            let result = update(&mut state.criteria);
            let visible = filter::apply(&self.store.assets(), &state.criteria);
            let count = visible.len();
            state.visible = Arc::new(visible);
            (result, count)
        };
        self.event_sink
            .emit(MarketplaceEvent::filters_changed(visible));
        result
    }

    fn read_state(&self) -> RwLockReadGuard<'_, ViewState> {
        self.state.read().unwrap_or_else(|poisoned| {
            warn!("Marketplace state lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, ViewState> {
        self.state.write().unwrap_or_else(|poisoned| {
            warn!("Marketplace state lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }
}

/// Clears the loading flag when a refresh future is dropped before its
/// resolver run finishes.
struct LoadingGuard<'a> {
    service: &'a MarketplaceService,
    generation: Generation,
    armed: bool,
}

impl<'a> LoadingGuard<'a> {
    fn new(service: &'a MarketplaceService, generation: Generation) -> Self {
        Self {
            service,
            generation,
            armed: true,
        }
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut state = self.service.write_state();
        // A newer refresh owns the flag.
        if self.service.store.is_current(self.generation) {
            debug!("Refresh {} was cancelled", self.generation);
            state.is_loading = false;
        }
    }
}

#[async_trait]
impl MarketplaceServiceTrait for MarketplaceService {
    async fn refresh(&self, context: &ChainContext) -> Result<RefreshOutcome> {
        let generation = self.begin_refresh();
        debug!("Refresh {} started for {}", generation, context);

        let mut guard = LoadingGuard::new(self, generation);
        let result = self.resolver.resolve(context).await;
        guard.disarm();

        match result {
            Ok(resolved) => {
                let count = resolved.assets.len();
                if self.store.commit(generation, resolved).is_none() {
                    return Ok(RefreshOutcome::Superseded { generation });
                }

                let visible = {
                    let mut state = self.write_state();
                    // A newer commit may already have landed; always filter the latest.
                    let visible = filter::apply(&self.store.assets(), &state.criteria);
                    let visible_count = visible.len();
                    state.visible = Arc::new(visible);
                    if self.store.is_current(generation) {
                        state.is_loading = false;
                        state.error = None;
                    }
                    visible_count
                };

                info!(
                    "Refresh {} committed {} assets ({} visible)",
                    generation, count, visible
                );
                self.event_sink.emit(MarketplaceEvent::assets_replaced(
                    generation.value(),
                    count,
                    visible,
                ));
                Ok(RefreshOutcome::Committed { generation, count })
            }
            Err(e) => {
                let message = self.config.fetch_error_message.clone();
                {
                    let mut state = self.write_state();
                    if !self.store.is_current(generation) {
                        debug!(
                            "Ignoring failure of superseded refresh {}: {}",
                            generation, e
                        );
                        return Ok(RefreshOutcome::Superseded { generation });
                    }
                    warn!("Refresh {} failed for {}: {}", generation, context, e);
                    state.is_loading = false;
                    state.error = Some(message.clone());
                }
                self.event_sink
                    .emit(MarketplaceEvent::fetch_failed(generation.value(), message));
                Err(e)
            }
        }
    }

    async fn on_context_change(&self, context: &ChainContext) -> Result<RefreshOutcome> {
        info!("Chain context changed to {}, refreshing listings", context);
        self.refresh(context).await
    }

    fn assets(&self) -> Arc<Vec<AssetDetail>> {
        self.store.assets()
    }

    fn facets(&self) -> Arc<FacetIndex> {
        self.store.facets()
    }

    fn visible_assets(&self) -> Arc<Vec<AssetDetail>> {
        self.read_state().visible.clone()
    }

    fn criteria(&self) -> FilterCriteria {
        self.read_state().criteria.clone()
    }

    fn is_loading(&self) -> bool {
        self.read_state().is_loading
    }

    fn error(&self) -> Option<String> {
        self.read_state().error.clone()
    }

    fn snapshot(&self) -> MarketplaceView {
        let state = self.read_state();
        let canonical = self.store.snapshot();
        MarketplaceView {
            assets: canonical.assets,
            visible: state.visible.clone(),
            facets: canonical.facets,
            criteria: state.criteria.clone(),
            is_loading: state.is_loading,
            error: state.error.clone(),
        }
    }

    fn toggle(&self, facet: Facet, value: &str) -> bool {
        self.update_criteria(|criteria| criteria.toggle(facet, value))
    }

    fn set_price_range(&self, min: f64, max: f64) {
        self.update_criteria(|criteria| criteria.set_price_range(min, max))
    }

    fn set_min_price(&self, min: f64) {
        self.update_criteria(|criteria| criteria.set_min_price(min))
    }

    fn set_max_price(&self, max: f64) {
        self.update_criteria(|criteria| criteria.set_max_price(max))
    }

    fn clear_filters(&self) {
        let initial = self.config.initial_criteria();
        self.update_criteria(|criteria| *criteria = initial)
    }
}
