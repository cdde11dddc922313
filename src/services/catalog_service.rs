use crate::{
    catalog::Facets,
    dto::products::ProductList,
    error::{AppError, AppResult},
    filter::FilterSelection,
    models::{Product, ProductId},
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn list_products(
    state: &AppState,
    selection: FilterSelection,
) -> AppResult<ApiResponse<ProductList>> {
    let items: Vec<Product> = state
        .catalog
        .filter(&selection)
        .iter()
        .map(|p| p.as_ref().clone())
        .collect();

    tracing::debug!(?selection, visible = items.len(), "catalog filtered");

    let meta = Meta::new(items.len());
    let message = if items.is_empty() {
        "No products match the selected filters"
    } else {
        "Products"
    };
    Ok(ApiResponse::success(message, ProductList { items }, Some(meta)))
}

pub async fn get_product(state: &AppState, id: ProductId) -> AppResult<ApiResponse<Product>> {
    let product = match state.catalog.get(id) {
        Some(p) => p.as_ref().clone(),
        None => return Err(AppError::NotFound),
    };
    Ok(ApiResponse::success("Product", product, None))
}

pub async fn facets() -> AppResult<ApiResponse<Facets>> {
    Ok(ApiResponse::success("Facets", Facets::default(), None))
}
