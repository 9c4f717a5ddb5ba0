// src/domain/order/entity.rs
use crate::domain::order::value_objects::{OrderId, OrderItem};
use crate::domain::product::Product;

/// A fully resolved order awaiting an identity from the order store.
///
/// `products[i]` is the catalog entry for `items[i]` at composition time.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub items: Vec<OrderItem>,
    pub products: Vec<Product>,
}

impl NewOrder {
    pub fn with_id(self, id: OrderId) -> Order {
        Order {
            id,
            items: self.items,
            products: self.products,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<OrderItem>,
    pub products: Vec<Product>,
}
