use crate::{
    audit::log_audit,
    dto::cart::{AddToCartRequest, CartView, UpdateQuantityRequest},
    error::{AppError, AppResult},
    models::ProductId,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn view_cart(state: &AppState) -> AppResult<ApiResponse<CartView>> {
    let ledger = state.cart.read().await;
    let view = CartView::from(&*ledger);
    let meta = Meta::new(view.items.len());
    Ok(ApiResponse::success("OK", view, Some(meta)))
}

pub async fn add_to_cart(
    state: &AppState,
    payload: AddToCartRequest,
) -> AppResult<ApiResponse<CartView>> {
    let product = match state.catalog.get(payload.product_id) {
        Some(p) => p.clone(),
        None => return Err(AppError::NotFound),
    };

    let size = match payload.size.filter(|s| !s.is_empty()) {
        Some(size) if product.offers_size(&size) => size,
        Some(size) => {
            return Err(AppError::BadRequest(format!(
                "size {size:?} is not offered for product {}",
                product.id
            )));
        }
        None => match product.default_size() {
            Some(size) => size.to_string(),
            None => {
                return Err(AppError::BadRequest(format!(
                    "product {} has no sizes",
                    product.id
                )));
            }
        },
    };

    let view = state
        .cart
        .update(|ledger| {
            ledger.add_item(product.clone(), &size);
            (CartView::from(&*ledger), true)
        })
        .await;

    log_audit(
        "cart_add",
        Some("cart_items"),
        Some(serde_json::json!({ "product_id": product.id, "size": size })),
    );

    Ok(ApiResponse::success("Added to cart", view, None))
}

pub async fn update_quantity(
    state: &AppState,
    product_id: ProductId,
    payload: UpdateQuantityRequest,
) -> AppResult<ApiResponse<CartView>> {
    let (view, changed) = state
        .cart
        .update(|ledger| {
            let changed = ledger.set_quantity(product_id, &payload.size, payload.quantity);
            ((CartView::from(&*ledger), changed), changed)
        })
        .await;

    if changed {
        log_audit(
            "cart_update",
            Some("cart_items"),
            Some(serde_json::json!({
                "product_id": product_id,
                "size": payload.size,
                "quantity": payload.quantity
            })),
        );
    } else {
        tracing::debug!(product_id, size = %payload.size, "quantity update left cart unchanged");
    }

    Ok(ApiResponse::success("OK", view, None))
}

pub async fn remove_from_cart(
    state: &AppState,
    product_id: ProductId,
    size: &str,
) -> AppResult<ApiResponse<CartView>> {
    let (view, removed) = state
        .cart
        .update(|ledger| {
            let removed = ledger.remove_item(product_id, size);
            ((CartView::from(&*ledger), removed), removed)
        })
        .await;

    if removed {
        log_audit(
            "cart_remove",
            Some("cart_items"),
            Some(serde_json::json!({ "product_id": product_id, "size": size })),
        );
    }

    Ok(ApiResponse::success("Removed from cart", view, Some(Meta::empty())))
}
