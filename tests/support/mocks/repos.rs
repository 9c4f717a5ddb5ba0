// tests/support/mocks/repos.rs
use async_trait::async_trait;
use kart_api::domain::errors::{DomainError, DomainResult};
use kart_api::domain::order::{NewOrder, Order, OrderId, OrderRepository};
use kart_api::domain::product::{Product, ProductRepository};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Product store whose backend is down.
#[derive(Default)]
pub struct FailingProductRepo;

#[async_trait]
impl ProductRepository for FailingProductRepo {
    async fn get(&self, _id: &str) -> DomainResult<Product> {
        Err(DomainError::Persistence("catalog connection refused".into()))
    }

    async fn list(&self, _page: i64, _page_size: i64) -> DomainResult<Vec<Product>> {
        Err(DomainError::Persistence("catalog connection refused".into()))
    }
}

/// Order store that rejects every write and counts attempts.
#[derive(Default)]
pub struct FailingOrderRepo {
    pub attempts: AtomicUsize,
}

impl FailingOrderRepo {
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OrderRepository for FailingOrderRepo {
    async fn create(&self, _order: NewOrder) -> DomainResult<Order> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(DomainError::Persistence("disk full".into()))
    }

    async fn find_by_id(&self, _id: OrderId) -> DomainResult<Option<Order>> {
        Ok(None)
    }
}

/// Product store that answers only after `delay`.
pub struct SlowProductRepo {
    pub delay: Duration,
}

#[async_trait]
impl ProductRepository for SlowProductRepo {
    async fn get(&self, id: &str) -> DomainResult<Product> {
        tokio::time::sleep(self.delay).await;
        Ok(Product {
            id: id.to_string(),
            name: "slow".into(),
            category: "slow".into(),
            price: 1.0,
        })
    }

    async fn list(&self, _page: i64, _page_size: i64) -> DomainResult<Vec<Product>> {
        tokio::time::sleep(self.delay).await;
        Ok(Vec::new())
    }
}
