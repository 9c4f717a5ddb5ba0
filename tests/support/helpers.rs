// tests/support/helpers.rs
use axum::Router;
use axum::body::{self, Body, Bytes};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use kart_api::application::dto::ProductDto;
use kart_api::application::ports::{security::AuthProvider, time::Clock};
use kart_api::application::services::ApplicationServices;
use kart_api::domain::coupon::CouponRepository;
use kart_api::domain::order::OrderRepository;
use kart_api::domain::product::ProductRepository;
use kart_api::infrastructure::repositories::{
    InMemoryCouponRepository, InMemoryOrderRepository, InMemoryProductRepository,
};
use kart_api::infrastructure::security::StaticAuthProvider;
use kart_api::infrastructure::time::FixedClock;
use kart_api::presentation::http::error::ErrorResponse;
use kart_api::presentation::http::routes::build_router;
use kart_api::presentation::http::state::{HttpSettings, HttpState};
use serde_json::{Value, json};
use std::sync::Arc;

use super::mocks::fixed_now;

pub const AUTH_HEADER: &str = "api_key";
pub const VALID_COUPON: &str = "OVER9000";

pub fn sample_catalog() -> InMemoryProductRepository {
    InMemoryProductRepository::sample().expect("bundled catalog parses")
}

/// Catalog entry for `id` as the API serialises it.
pub fn catalog_entry(id: &str) -> ProductDto {
    sample_catalog()
        .products()
        .iter()
        .find(|p| p.id == id)
        .cloned()
        .map(ProductDto::from)
        .expect("product in sample catalog")
}

pub struct TestStateBuilder {
    product_repo: Arc<dyn ProductRepository>,
    order_repo: Arc<dyn OrderRepository>,
    coupon_repo: Arc<dyn CouponRepository>,
    auth_provider: Arc<dyn AuthProvider>,
    clock: Arc<dyn Clock>,
    settings: HttpSettings,
}

impl Default for TestStateBuilder {
    fn default() -> Self {
        Self {
            product_repo: Arc::new(sample_catalog()),
            order_repo: Arc::new(InMemoryOrderRepository::new()),
            coupon_repo: Arc::new(InMemoryCouponRepository::new([VALID_COUPON.to_string()])),
            auth_provider: Arc::new(StaticAuthProvider::with_test_credentials(fixed_now())),
            clock: Arc::new(FixedClock(fixed_now())),
            settings: HttpSettings::default(),
        }
    }
}

impl TestStateBuilder {
    pub fn product_repo(mut self, repo: Arc<dyn ProductRepository>) -> Self {
        self.product_repo = repo;
        self
    }

    pub fn order_repo(mut self, repo: Arc<dyn OrderRepository>) -> Self {
        self.order_repo = repo;
        self
    }

    pub fn auth_provider(mut self, provider: Arc<dyn AuthProvider>) -> Self {
        self.auth_provider = provider;
        self
    }

    pub fn settings(mut self, settings: HttpSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn build_state(self) -> HttpState {
        let services = Arc::new(ApplicationServices::new(
            self.product_repo,
            self.order_repo,
            self.coupon_repo,
            self.auth_provider,
            self.clock,
        ));
        HttpState {
            services,
            settings: Arc::new(self.settings),
        }
    }

    pub fn build_router(self) -> Router {
        build_router(self.build_state())
    }
}

pub fn make_test_router() -> Router {
    TestStateBuilder::default().build_router()
}

pub fn good_order() -> Value {
    json!({ "items": [{ "productId": "1", "quantity": 1 }] })
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

/// `POST /order` with an optional credential and a JSON body.
pub fn order_request(credential: Option<&str>, payload: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/order")
        .header("content-type", "application/json");
    if let Some(credential) = credential {
        builder = builder.header(AUTH_HEADER, credential);
    }
    builder
        .body(Body::from(payload.to_string()))
        .expect("request")
}

pub async fn read_body(resp: Response) -> Bytes {
    body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body")
}

pub async fn read_json<T: serde::de::DeserializeOwned>(resp: Response) -> T {
    let bytes = read_body(resp).await;
    serde_json::from_slice(&bytes).expect("valid json body")
}

/// Assert a `{code, message}` error body with the expected status.
pub async fn assert_error_response(resp: Response, status: StatusCode, code: &str, message: &str) {
    assert_eq!(resp.status(), status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let body: ErrorResponse = read_json(resp).await;
    assert_eq!(
        body,
        ErrorResponse {
            code: code.into(),
            message: message.into()
        }
    );
}

/// Assert an authorization rejection: expected status and a zero-length body.
pub async fn assert_empty_rejection(resp: Response, status: StatusCode) {
    assert_eq!(resp.status(), status);
    let body = read_body(resp).await;
    assert!(body.is_empty(), "expected empty body, got {body:?}");
}
