// src/infrastructure/repositories/memory_order.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::order::{NewOrder, Order, OrderId, OrderRepository};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Order store keeping created orders in a map. Products are stored
/// denormalised with each order, so catalog changes never alter it.
#[derive(Default)]
pub struct InMemoryOrderRepository {
    orders: Mutex<HashMap<OrderId, Order>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored orders. Still readable after a writer panicked;
    /// writes are refused from then on.
    pub fn len(&self) -> usize {
        match self.orders.lock() {
            Ok(guard) => guard.len(),
            Err(poisoned) => {
                tracing::warn!("order store lock poisoned");
                poisoned.into_inner().len()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn create(&self, order: NewOrder) -> DomainResult<Order> {
        let mut guard = self
            .orders
            .lock()
            .map_err(|_| DomainError::Persistence("order store lock poisoned".into()))?;

        // v4 collisions are practically impossible; regenerate rather than overwrite.
        let mut id = OrderId::generate();
        while guard.contains_key(&id) {
            id = OrderId::generate();
        }

        let order = order.with_id(id);
        guard.insert(id, order.clone());
        Ok(order)
    }

    async fn find_by_id(&self, id: OrderId) -> DomainResult<Option<Order>> {
        let guard = self
            .orders
            .lock()
            .map_err(|_| DomainError::Persistence("order store lock poisoned".into()))?;
        Ok(guard.get(&id).cloned())
    }
}
