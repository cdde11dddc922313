use std::sync::Arc;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub type ProductId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub category: String,
    pub age: String,
    pub gender: String,
    pub sport: String,
    pub sizes: Vec<String>,
    #[serde(default)]
    pub is_new: bool,
    /// Percentage shown on the product badge. Never used to compute `price`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<u8>,
}

impl Product {
    /// Size used when the shopper adds the product without choosing one.
    pub fn default_size(&self) -> Option<&str> {
        self.sizes.first().map(String::as_str)
    }

    pub fn offers_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }
}

/// One `(product, size)` pairing in the cart.
///
/// The product is shared with the catalog, so totals always read the
/// catalog's current price.
#[derive(Debug, Clone)]
pub struct CartLineItem {
    pub product: Arc<Product>,
    pub selected_size: String,
    pub quantity: u64,
}

impl CartLineItem {
    pub fn matches(&self, product_id: ProductId, size: &str) -> bool {
        self.product.id == product_id && self.selected_size == size
    }

    /// Saturates at `u64::MAX` rather than wrapping.
    pub fn line_total(&self) -> u64 {
        self.product.price.saturating_mul(self.quantity)
    }
}
