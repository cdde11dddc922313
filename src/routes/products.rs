use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};

use crate::{
    dto::products::ProductList,
    error::AppResult,
    filter::FilterSelection,
    models::{Product, ProductId},
    response::ApiResponse,
    services::catalog_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products))
        .route("/{id}", get(get_product))
}

#[utoipa::path(
    get,
    path = "/api/products",
    params(FilterSelection),
    responses(
        (status = 200, description = "Products matching every selected filter, in catalog order", body = ApiResponse<ProductList>)
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(selection): Query<FilterSelection>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    let response = catalog_service::list_products(&state, selection).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Get product", body = ApiResponse<Product>),
        (status = 404, description = "Product not found"),
    ),
    tag = "Products"
)]
pub async fn get_product(
    Path(id): Path<ProductId>,
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let response = catalog_service::get_product(&state, id).await?;
    Ok(Json(response))
}
