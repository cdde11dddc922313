use axum::{Json, Router, routing::get};

use crate::{
    catalog::Facets, error::AppResult, response::ApiResponse, services::catalog_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/facets", get(facets))
}

#[utoipa::path(
    get,
    path = "/api/catalog/facets",
    responses(
        (status = 200, description = "Values offered by each filter", body = ApiResponse<Facets>)
    ),
    tag = "Products"
)]
pub async fn facets() -> AppResult<Json<ApiResponse<Facets>>> {
    Ok(Json(catalog_service::facets().await?))
}
