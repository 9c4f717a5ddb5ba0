// src/presentation/http/routes.rs
use crate::domain::auth::Scope;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{orders, products},
    error::HttpError,
    middleware::{authenticate, require_scope},
    openapi::{self, StatusResponse},
};
use axum::{
    BoxError, Extension, Router,
    error_handling::HandleErrorLayer,
    extract::Request,
    middleware::{self, Next},
    routing::{get, post},
};
use tower::{ServiceBuilder, timeout::error::Elapsed};
use tower_http::trace::TraceLayer;

/// Build the application router.
///
/// Request flow: trace, timeout, authentication (skipped for exempt
/// prefixes), routing, then any per-route scope check before the handler.
pub fn build_router(state: HttpState) -> Router {
    let request_timeout = state.settings.request_timeout;

    Router::new()
        .route("/health", get(health))
        .route("/openapi.json", get(openapi::serve_openapi))
        .route("/product", get(products::list_products))
        .route("/product/{product_id}", get(products::get_product))
        .route(
            "/order",
            post(orders::create_order).route_layer(middleware::from_fn(|req: Request, next: Next| {
                require_scope(req, next, Scope::ORDER_CREATE)
            })),
        )
        .layer(middleware::from_fn(authenticate))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_timeout))
                .timeout(request_timeout),
        )
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

/// The deadline drops the in-flight handler future; whatever it was awaiting
/// is cancelled with it.
async fn handle_timeout(err: BoxError) -> HttpError {
    if err.is::<Elapsed>() {
        tracing::warn!("request exceeded its deadline");
        HttpError::timeout()
    } else {
        tracing::error!(error = %err, "unhandled middleware error");
        HttpError::internal()
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
