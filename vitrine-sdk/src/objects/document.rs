use serde::{Deserialize, Serialize};

use super::{MediaReference, Product};

/// The single site configuration document.
///
/// Created externally on first publish; thereafter only ever read in full
/// and replaced in full. The document is one tree with no cross-references
/// except the implicit wishlist join on product ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteDocument {
    pub brand_name: String,
    pub hero: HeroBlock,
    pub about: AboutBlock,
    pub contact: ContactBlock,
    pub products: Vec<Product>,
}

/// Hero banner content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroBlock {
    pub tagline: String,
    pub title: String,
    pub accent_title: String,
    pub subtitle: String,
    pub background_image: MediaReference,
}

/// About-section content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutBlock {
    pub subtitle: String,
    pub title: String,
    pub content: String,
    pub image: MediaReference,
}

/// Contact channels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactBlock {
    pub address: String,
    pub phone: String,
    pub email: String,
    pub instagram: String,
    pub instagram_dm: String,
}
