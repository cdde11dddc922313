use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    catalog::Facets,
    dto::{
        cart::{AddToCartRequest, CartLineDto, CartView, UpdateQuantityRequest},
        products::ProductList,
    },
    filter::FilterSelection,
    models::Product,
    response::{ApiResponse, Meta},
    routes::{cart, catalog, health, products},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::list_products,
        products::get_product,
        catalog::facets,
        cart::view_cart,
        cart::add_to_cart,
        cart::update_quantity,
        cart::remove_from_cart
    ),
    components(
        schemas(
            Product,
            ProductList,
            Facets,
            FilterSelection,
            AddToCartRequest,
            UpdateQuantityRequest,
            CartLineDto,
            CartView,
            Meta,
            ApiResponse<Product>,
            ApiResponse<ProductList>,
            ApiResponse<CartView>,
            ApiResponse<Facets>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Catalog and filter endpoints"),
        (name = "Cart", description = "Session cart endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
