//! Canonical asset slot guarded by a refresh generation.
//!
//! Each refresh takes a [`Generation`] before it starts. Only the most
//! recently issued generation may commit, so a slow response from an earlier
//! context can never overwrite the result of a later one, whatever order the
//! responses arrive in.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use closet_market_data::AssetDetail;
use log::{debug, warn};

use super::facets::FacetIndex;
use super::resolver::ResolvedListings;

/// Token identifying one refresh call. Higher is more recent.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Generation(u64);

impl Generation {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Committed contents of the slot.
#[derive(Clone, Debug, Default)]
pub struct CanonicalSnapshot {
    /// Generation that produced this snapshot; `None` before the first commit.
    pub generation: Option<Generation>,
    pub assets: Arc<Vec<AssetDetail>>,
    pub facets: Arc<FacetIndex>,
}

/// Single-writer slot holding the canonical collection.
#[derive(Debug, Default)]
pub struct CanonicalStore {
    issued: AtomicU64,
    current: RwLock<CanonicalSnapshot>,
}

impl CanonicalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the generation for a refresh that is about to start.
    pub fn begin(&self) -> Generation {
        Generation(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// The most recently issued generation, if any.
    pub fn latest(&self) -> Option<Generation> {
        match self.issued.load(Ordering::SeqCst) {
            0 => None,
            n => Some(Generation(n)),
        }
    }

    /// Whether `generation` is still the most recently issued one.
    pub fn is_current(&self, generation: Generation) -> bool {
        self.issued.load(Ordering::SeqCst) == generation.0
    }

    /// Replace the collection if `generation` is still current.
    ///
    /// Returns the committed snapshot, or `None` when a newer refresh has
    /// started since `generation` was issued.
    pub fn commit(
        &self,
        generation: Generation,
        resolved: ResolvedListings,
    ) -> Option<CanonicalSnapshot> {
        let mut current = self.write();
        // Checked under the write lock so two completions can't interleave.
        if !self.is_current(generation) {
            debug!(
                "Discarding result of superseded refresh {} (latest {})",
                generation,
                self.issued.load(Ordering::SeqCst)
            );
            return None;
        }
        *current = CanonicalSnapshot {
            generation: Some(generation),
            assets: Arc::new(resolved.assets),
            facets: Arc::new(resolved.facets),
        };
        Some(current.clone())
    }

    pub fn snapshot(&self) -> CanonicalSnapshot {
        self.read().clone()
    }

    pub fn assets(&self) -> Arc<Vec<AssetDetail>> {
        self.read().assets.clone()
    }

    pub fn facets(&self) -> Arc<FacetIndex> {
        self.read().facets.clone()
    }

    /// Poisoning only means a reader panicked; the snapshot itself is
    /// replaced atomically, so recover it.
    fn read(&self) -> RwLockReadGuard<'_, CanonicalSnapshot> {
        self.current.read().unwrap_or_else(|poisoned| {
            warn!("Canonical store lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, CanonicalSnapshot> {
        self.current.write().unwrap_or_else(|poisoned| {
            warn!("Canonical store lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }
}
