use serde::{Deserialize, Serialize};

use super::types::{Address, Amount};

/// A listing account as read from the marketplace program.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingRecord {
    /// Mint of the asset offered for sale
    pub mint: Address,

    /// Wallet that created the listing
    pub seller: Address,

    /// Asking price in base units
    pub price: Amount,

    /// Address of the listing account itself
    pub listing_account: Address,

    /// Whether the listing can still be bought
    pub is_active: bool,
}

impl ListingRecord {
    pub fn new(
        mint: impl Into<Address>,
        seller: impl Into<Address>,
        price: Amount,
        listing_account: impl Into<Address>,
        is_active: bool,
    ) -> Self {
        Self {
            mint: mint.into(),
            seller: seller.into(),
            price,
            listing_account: listing_account.into(),
            is_active,
        }
    }
}
