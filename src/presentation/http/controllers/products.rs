// src/presentation/http/controllers/products.rs
use crate::application::{
    dto::ProductDto,
    queries::products::{GetProductByIdQuery, ListProductsQuery},
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query, rejection::QueryRejection},
};
use serde::Deserialize;
use utoipa::IntoParams;

fn default_page_size() -> i64 {
    ListProductsQuery::DEFAULT_PAGE_SIZE
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ProductListParams {
    #[serde(default)]
    pub page: i64,
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

#[utoipa::path(
    get,
    path = "/product",
    params(ProductListParams),
    responses(
        (status = 200, description = "Products in catalog order.", body = [ProductDto]),
        (status = 400, description = "Malformed query or invalid pagination.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn list_products(
    Extension(state): Extension<HttpState>,
    params: Result<Query<ProductListParams>, QueryRejection>,
) -> HttpResult<Json<Vec<ProductDto>>> {
    let Query(params) = params.map_err(|rejection| {
        HttpError::bad_request(format!("invalid query: {}", rejection.body_text()))
    })?;

    state
        .services
        .product_queries
        .list_products(ListProductsQuery {
            page: params.page,
            page_size: params.page_size,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/product/{productId}",
    params(("productId" = String, Path, description = "Product identifier")),
    responses(
        (status = 200, description = "The product.", body = ProductDto),
        (status = 404, description = "No such product.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn get_product(
    Extension(state): Extension<HttpState>,
    Path(product_id): Path<String>,
) -> HttpResult<Json<ProductDto>> {
    state
        .services
        .product_queries
        .get_product_by_id(GetProductByIdQuery { id: product_id })
        .await
        .into_http()
        .map(Json)
}
