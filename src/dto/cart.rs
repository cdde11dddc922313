use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    cart::CartLedger,
    models::{CartLineItem, Product, ProductId},
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddToCartRequest {
    pub product_id: ProductId,
    /// Defaults to the product's first size.
    pub size: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateQuantityRequest {
    pub size: String,
    /// Zero or below removes the line item.
    pub quantity: i64,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RemoveFromCartQuery {
    pub size: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartLineDto {
    pub product: Product,
    pub selected_size: String,
    pub quantity: u64,
    pub line_total: u64,
}

impl From<&CartLineItem> for CartLineDto {
    fn from(item: &CartLineItem) -> Self {
        Self {
            product: item.product.as_ref().clone(),
            selected_size: item.selected_size.clone(),
            quantity: item.quantity,
            line_total: item.line_total(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartView {
    pub items: Vec<CartLineDto>,
    pub total_items: u64,
    pub total_price: u64,
}

impl From<&CartLedger> for CartView {
    fn from(ledger: &CartLedger) -> Self {
        Self {
            items: ledger.items().iter().map(CartLineDto::from).collect(),
            total_items: ledger.total_item_count(),
            total_price: ledger.total_price(),
        }
    }
}
