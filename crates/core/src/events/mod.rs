//! Marketplace events module.
//!
//! Provides the event types and the sink trait the marketplace service emits
//! through after its state changes. The presentation layer implements the
//! sink to schedule re-renders.

mod marketplace_event;
mod sink;

pub use marketplace_event::*;
pub use sink::*;
