//! Core error types for the Closet marketplace engine.
//!
//! Listing source failures are wrapped here so callers can tell a failed
//! listing fetch apart from a failed per-mint resolution when logging, while
//! the presentation layer only ever sees [`Error::user_message`].

use closet_market_data::{Address, ListingSourceError};
use thiserror::Error;

use crate::constants::DEFAULT_FETCH_ERROR_MESSAGE;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the marketplace engine.
#[derive(Error, Debug)]
pub enum Error {
    /// Listing accounts could not be fetched or decoded.
    #[error("Failed to fetch listings: {0}")]
    Fetch(#[source] ListingSourceError),

    /// One mint's detail could not be resolved; the whole run fails.
    #[error("Failed to resolve asset {mint}: {source}")]
    Resolution {
        mint: Address,
        #[source]
        source: ListingSourceError,
    },

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),
}

impl Error {
    /// Whether this error came out of a resolver run.
    pub fn is_resolver_error(&self) -> bool {
        matches!(self, Self::Fetch(_) | Self::Resolution { .. })
    }

    /// Message safe to show to the user.
    ///
    /// Fetch and resolution failures collapse into one message; the detail
    /// stays in the logs.
    pub fn user_message(&self) -> String {
        match self {
            Self::Fetch(_) | Self::Resolution { .. } => DEFAULT_FETCH_ERROR_MESSAGE.to_string(),
            Self::InvalidConfigValue(_) => self.to_string(),
        }
    }
}
