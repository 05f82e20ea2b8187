//! Chain-access context handed to the listing resolver.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::models::Address;

/// Commitment level requested from the RPC node.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
    Processed,
    #[default]
    Confirmed,
    Finalized,
}

/// RPC connection parameters.
///
/// Opaque to the engine; only listing sources interpret it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Connection {
    rpc_url: Arc<str>,
    commitment: Commitment,
}

impl Connection {
    pub fn new(rpc_url: impl AsRef<str>) -> Self {
        Self {
            rpc_url: Arc::from(rpc_url.as_ref()),
            commitment: Commitment::default(),
        }
    }

    pub fn with_commitment(mut self, commitment: Commitment) -> Self {
        self.commitment = commitment;
        self
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    pub fn commitment(&self) -> Commitment {
        self.commitment
    }
}

/// Program client wrapper combining a connection with an optional wallet.
///
/// Construction never fails: a missing wallet gives a read-only provider,
/// which is enough to list accounts and read metadata.
#[derive(Clone, Debug)]
pub struct ProviderHandle {
    connection: Connection,
    wallet: Option<Address>,
}

impl ProviderHandle {
    pub fn new(connection: Connection, wallet: Option<Address>) -> Self {
        Self { connection, wallet }
    }

    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    pub fn wallet(&self) -> Option<&Address> {
        self.wallet.as_ref()
    }

    pub fn is_read_only(&self) -> bool {
        self.wallet.is_none()
    }
}

/// Connection plus signer identity. A change of context triggers a refetch.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ChainContext {
    pub connection: Connection,
    pub signer: Option<Address>,
}

impl ChainContext {
    pub fn new(connection: Connection, signer: Option<Address>) -> Self {
        Self { connection, signer }
    }

    /// A context with no wallet connected.
    pub fn read_only(connection: Connection) -> Self {
        Self::new(connection, None)
    }

    /// The signer identity, if a wallet is connected.
    pub fn identity(&self) -> Option<&Address> {
        self.signer.as_ref()
    }

    /// Build the provider wrapper for this context.
    pub fn provider(&self) -> ProviderHandle {
        ProviderHandle::new(self.connection.clone(), self.signer.clone())
    }
}

impl fmt::Display for ChainContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.signer {
            Some(signer) => write!(f, "{} as {}", self.connection.rpc_url(), signer.short()),
            None => write!(f, "{} (read-only)", self.connection.rpc_url()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_only_provider() {
        let context = ChainContext::read_only(Connection::new("https://api.devnet.solana.com"));
        let provider = context.provider();

        assert!(provider.is_read_only());
        assert!(context.identity().is_none());
        assert_eq!(provider.connection().commitment(), Commitment::Confirmed);
    }

    #[test]
    fn test_provider_carries_wallet() {
        let wallet = Address::new("Wallet1111111111");
        let context = ChainContext::new(
            Connection::new("http://localhost:8899").with_commitment(Commitment::Finalized),
            Some(wallet.clone()),
        );
        let provider = context.provider();

        assert_eq!(provider.wallet(), Some(&wallet));
        assert_eq!(provider.connection().commitment(), Commitment::Finalized);
        assert_eq!(context.to_string(), "http://localhost:8899 as Wall...1111");
    }
}
