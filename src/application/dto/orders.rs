use crate::application::dto::ProductDto;
use crate::domain::order::{Order, OrderItem};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// A line of an order as sent by the caller. Absent fields decode to their
/// zero value so that business-rule checks, not decoding, reject them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDto {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub product_id: String,
    #[serde(default)]
    pub quantity: i64,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl From<OrderItem> for OrderItemDto {
    fn from(item: OrderItem) -> Self {
        Self {
            product_id: item.product_id,
            quantity: item.quantity,
        }
    }
}

impl From<OrderItemDto> for OrderItem {
    fn from(item: OrderItemDto) -> Self {
        OrderItem::new(item.product_id, item.quantity)
    }
}

/// A persisted order. `products` is positionally aligned with `items`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderDto {
    pub id: String,
    pub items: Vec<OrderItemDto>,
    pub products: Vec<ProductDto>,
}

impl From<Order> for OrderDto {
    fn from(order: Order) -> Self {
        Self {
            id: order.id.to_string(),
            items: order.items.into_iter().map(Into::into).collect(),
            products: order.products.into_iter().map(Into::into).collect(),
        }
    }
}
