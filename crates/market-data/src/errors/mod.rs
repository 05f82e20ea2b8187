//! Error types for the chain-access boundary.
//!
//! [`ListingSourceError`] covers every failure a [`ListingSource`](crate::ListingSource)
//! implementation can report, whether it happened while listing accounts or
//! while resolving one mint's metadata.

use thiserror::Error;

use crate::models::Address;

/// Errors reported by a listing source.
#[derive(Error, Debug)]
pub enum ListingSourceError {
    /// The RPC endpoint or program could not be reached.
    #[error("Listing source unreachable: {0}")]
    Unreachable(String),

    /// Account data came back but could not be decoded.
    #[error("Malformed listing data: {0}")]
    Malformed(String),

    /// The mint has no metadata account, or its off-chain JSON is missing.
    #[error("Metadata not found for mint: {mint}")]
    MetadataNotFound {
        /// The mint whose metadata is missing
        mint: Address,
    },

    /// The request exceeded the connection's timeout.
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Any other transport failure.
    #[error("Network error: {0}")]
    Network(String),
}

impl ListingSourceError {
    /// Whether retrying the same request later could succeed.
    ///
    /// Only used for diagnostics; the engine itself never retries.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Unreachable(_) | Self::Timeout(_) | Self::Network(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(ListingSourceError::Timeout("rpc".to_string()).is_transient());
        assert!(ListingSourceError::Unreachable("rpc".to_string()).is_transient());
        assert!(ListingSourceError::Network("reset".to_string()).is_transient());
        assert!(!ListingSourceError::Malformed("bad discriminator".to_string()).is_transient());
        assert!(!ListingSourceError::MetadataNotFound {
            mint: Address::new("Mint1")
        }
        .is_transient());
    }

    #[test]
    fn test_error_display() {
        let error = ListingSourceError::MetadataNotFound {
            mint: Address::new("Mint1"),
        };
        assert_eq!(format!("{}", error), "Metadata not found for mint: Mint1");

        let error = ListingSourceError::Malformed("bad discriminator".to_string());
        assert_eq!(
            format!("{}", error),
            "Malformed listing data: bad discriminator"
        );
    }
}
