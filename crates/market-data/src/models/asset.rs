use serde::{Deserialize, Serialize};

use super::price::Price;
use super::types::Address;

/// Display-ready asset built from mint metadata and its listing.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDetail {
    /// Metadata name
    pub name: String,

    /// Metadata symbol
    pub symbol: String,

    /// Image URI from the off-chain metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Collection group key, when the mint belongs to one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    /// Natural key of the asset
    pub mint: Address,

    pub seller: Address,

    pub price: Price,

    /// Listing account the asset is offered through
    pub listing: Address,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}

impl AssetDetail {
    /// Create an asset with the required fields and no taxonomy.
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        mint: impl Into<Address>,
        seller: impl Into<Address>,
        price: impl Into<Price>,
        listing: impl Into<Address>,
    ) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            image: None,
            group: None,
            mint: mint.into(),
            seller: seller.into(),
            price: price.into(),
            listing: listing.into(),
            collection: None,
            designer: None,
            year: None,
        }
    }

    /// Set the image URI
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Set the group key
    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Set the collection
    pub fn collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = Some(collection.into());
        self
    }

    /// Set the designer
    pub fn designer(mut self, designer: impl Into<String>) -> Self {
        self.designer = Some(designer.into());
        self
    }

    /// Set the year
    pub fn year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }
}
