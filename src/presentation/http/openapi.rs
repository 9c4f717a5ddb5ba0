// src/presentation/http/openapi.rs
use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{ApiKey, ApiKeyValue, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};

use super::state::DEFAULT_AUTH_HEADER;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::products::list_products,
        crate::presentation::http::controllers::products::get_product,
        crate::presentation::http::controllers::orders::create_order,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::orders::CreateOrderRequest,
            crate::application::dto::ProductDto,
            crate::application::dto::OrderDto,
            crate::application::dto::OrderItemDto
        )
    ),
    tags(
        (name = "Products", description = "Read-only product catalog"),
        (name = "Orders", description = "Order placement"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiKeyScheme),
    info(
        title = "Kart API",
        description = "Product catalog and ordering API",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiKeyScheme;

impl Modify for ApiKeyScheme {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme(
            "apiKey",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(DEFAULT_AUTH_HEADER))),
        );
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn write_openapi_snapshot(path: impl AsRef<Path>) -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
