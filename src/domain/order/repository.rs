use crate::domain::errors::DomainResult;
use crate::domain::order::{NewOrder, Order, OrderId};
use async_trait::async_trait;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Assigns a unique identity to `order` and persists it.
    async fn create(&self, order: NewOrder) -> DomainResult<Order>;
    async fn find_by_id(&self, id: OrderId) -> DomainResult<Option<Order>>;
}
