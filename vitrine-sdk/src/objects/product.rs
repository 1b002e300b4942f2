use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::MediaReference;

/// Default call-to-action label for new products.
pub const DEFAULT_ORDER_BUTTON: &str = "Order Now";

/// One catalog entry.
///
/// `id` is generated once at creation, is never user-editable, and is the
/// stable join key for wishlist membership and list diffing. `details` and
/// `media` are ordered collections with no uniqueness constraint;
/// `media[0]` is conventionally the thumbnail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: String,
    pub description: String,
    pub category: String,
    /// Documents published by older editors may omit these two fields.
    #[serde(default)]
    pub details: Vec<String>,
    #[serde(default)]
    pub media: Vec<MediaReference>,
    pub order_button_name: String,
    #[serde(rename = "orderURL")]
    pub order_url: String,
}

impl Product {
    /// Create an empty product with a fresh unique id and the default
    /// order-button label.
    pub fn new() -> Self {
        Self {
            id: fresh_id(),
            name: String::new(),
            price: String::new(),
            description: String::new(),
            category: String::new(),
            details: Vec::new(),
            media: Vec::new(),
            order_button_name: DEFAULT_ORDER_BUTTON.to_string(),
            order_url: String::new(),
        }
    }
}

impl Default for Product {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate a product id. Ids are unique per call and never reused.
fn fresh_id() -> String {
    format!("prod_{}", Uuid::new_v4().simple())
}
