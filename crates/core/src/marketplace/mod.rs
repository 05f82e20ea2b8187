//! Marketplace listing engine.
//!
//! - [`resolver`] - Fetches listings and resolves each active mint's detail
//! - [`store`] - Canonical collection slot guarded by refresh generations
//! - [`criteria`] - Filter criteria and facet selections
//! - [`filter`] - Pure filter applied to the canonical collection
//! - [`facets`] - Distinct facet values for selection
//! - [`service`] - Presentation-facing service tying it together
//!
//! # Architecture
//!
//! ```text
//! ChainContext ─▶ ListingResolver ─▶ CanonicalStore ─▶ filter::apply ─▶ visible
//!                  (ListingSource)      (generation)        ▲
//!                                                           │
//!                                            FilterCriteria ┘
//! ```
//!
//! The resolver never applies filters, and the filter never touches the
//! network.

pub mod criteria;
pub mod facets;
pub mod filter;
pub mod resolver;
pub mod service;
pub mod store;
pub mod view;


pub use criteria::{Facet, FilterCriteria, PriceRange};
pub use facets::FacetIndex;
pub use filter::apply;
pub use resolver::{ListingResolver, ResolvedListings};
pub use service::{MarketplaceService, MarketplaceServiceTrait};
pub use store::{CanonicalSnapshot, CanonicalStore, Generation};
pub use view::{MarketplaceView, RefreshOutcome};
