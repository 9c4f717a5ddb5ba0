// src/presentation/http/controllers/orders.rs
use crate::application::{
    commands::orders::CreateOrderCommand,
    dto::{OrderDto, OrderItemDto},
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::rejection::JsonRejection};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    /// Optional promo code applied to the order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon_code: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItemDto>,
}

impl From<CreateOrderRequest> for CreateOrderCommand {
    fn from(request: CreateOrderRequest) -> Self {
        CreateOrderCommand {
            coupon_code: request.coupon_code,
            items: request.items.into_iter().map(Into::into).collect(),
        }
    }
}

#[utoipa::path(
    post,
    path = "/order",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order created.", body = OrderDto),
        (status = 400, description = "Malformed payload.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or unknown credential."),
        (status = 403, description = "Token outside its validity window or missing scope order:create."),
        (status = 422, description = "Order breaks a business rule.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("apiKey" = [])),
    tag = "Orders"
)]
pub async fn create_order(
    Extension(state): Extension<HttpState>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> HttpResult<Json<OrderDto>> {
    let Json(request) = payload.map_err(|rejection| {
        HttpError::bad_request(format!("invalid request payload: {}", rejection.body_text()))
    })?;

    state
        .services
        .order_commands
        .create_order(request.into())
        .await
        .into_http()
        .map(Json)
}
