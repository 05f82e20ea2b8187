//! Sinks the marketplace service reports state changes through.

use std::sync::{Arc, Mutex, MutexGuard};

use super::MarketplaceEvent;

/// Receiver for marketplace events.
///
/// Called synchronously after the state change it reports, outside the
/// service's locks. Implementations must not block.
pub trait MarketplaceEventSink: Send + Sync {
    fn emit(&self, event: MarketplaceEvent);
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpEventSink;

impl MarketplaceEventSink for NoOpEventSink {
    fn emit(&self, _event: MarketplaceEvent) {}
}

/// Keeps every event in emission order.
///
/// Clones share the same log, so one handle can be given to the service
/// and another kept for reading.
#[derive(Clone, Debug, Default)]
pub struct RecordingEventSink {
    log: Arc<Mutex<Vec<MarketplaceEvent>>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<MarketplaceEvent> {
        self.log().clone()
    }

    /// How the refresh with `generation` ended, if it reported an end.
    ///
    /// Superseded and cancelled refreshes only ever report their start.
    pub fn outcome_of(&self, generation: u64) -> Option<MarketplaceEvent> {
        self.log()
            .iter()
            .rev()
            .find(|e| e.is_refresh_outcome() && e.generation() == Some(generation))
            .cloned()
    }

    /// Generations of refresh events, in the order they were emitted.
    pub fn refresh_generations(&self) -> Vec<u64> {
        self.log().iter().filter_map(MarketplaceEvent::generation).collect()
    }

    fn log(&self) -> MutexGuard<'_, Vec<MarketplaceEvent>> {
        self.log.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl MarketplaceEventSink for RecordingEventSink {
    fn emit(&self, event: MarketplaceEvent) {
        self.log().push(event);
    }
}
