use crate::domain::errors::DomainResult;
use crate::domain::product::entity::Product;
use async_trait::async_trait;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Fails with `DomainError::NotFound` when no product has `id`.
    async fn get(&self, id: &str) -> DomainResult<Product>;

    /// Returns the zero-based `page` of `page_size` products. Fails with
    /// `DomainError::Validation` when `page < 0` or `page_size < 1`.
    async fn list(&self, page: i64, page_size: i64) -> DomainResult<Vec<Product>>;
}
