// src/infrastructure/repositories/memory_product.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::product::{Product, ProductRepository};
use async_trait::async_trait;
use serde::Deserialize;

/// Catalog shipped with the binary, used when no catalog file is configured.
pub const SAMPLE_CATALOG: &str = include_str!("../../../data/products.json");

#[derive(Debug, Deserialize)]
struct ProductRecord {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    price: f64,
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        Product {
            id: record.id,
            name: record.name,
            category: record.category,
            price: record.price,
        }
    }
}

/// Product catalog held in an ordered, read-only list.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductRepository {
    products: Vec<Product>,
}

impl InMemoryProductRepository {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Build a catalog from a JSON array of products.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let records: Vec<ProductRecord> = serde_json::from_str(json)?;
        Ok(Self::new(records.into_iter().map(Into::into).collect()))
    }

    pub fn sample() -> Result<Self, serde_json::Error> {
        Self::from_json(SAMPLE_CATALOG)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get(&self, id: &str) -> DomainResult<Product> {
        self.products
            .iter()
            .find(|product| product.id == id)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(format!("product {id} not found")))
    }

    async fn list(&self, page: i64, page_size: i64) -> DomainResult<Vec<Product>> {
        if page < 0 {
            return Err(DomainError::Validation("page must be zero or greater".into()));
        }
        if page_size < 1 {
            return Err(DomainError::Validation(
                "pageSize must be greater than zero".into(),
            ));
        }

        let len = self.products.len();
        let page = usize::try_from(page).unwrap_or(usize::MAX);
        let page_size = usize::try_from(page_size).unwrap_or(usize::MAX);
        let start = page.saturating_mul(page_size).min(len);
        let end = start.saturating_add(page_size).min(len);
        Ok(self.products[start..end].to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> InMemoryProductRepository {
        InMemoryProductRepository::sample().unwrap()
    }

    #[tokio::test]
    async fn get_returns_catalog_entry() {
        let product = catalog().get("1").await.unwrap();
        assert_eq!(product.name, "Waffle with Berries");
        assert_eq!(product.price, 6.5);
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let err = catalog().get("9999").await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(ref msg) if msg == "product 9999 not found"));
    }

    #[tokio::test]
    async fn list_slices_pages_in_catalog_order() {
        let repo = catalog();
        let first = repo.list(0, 4).await.unwrap();
        let ids: Vec<_> = first.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4"]);

        let last = repo.list(2, 4).await.unwrap();
        assert_eq!(last.len(), 1);
        assert_eq!(last[0].id, "9");
    }

    #[tokio::test]
    async fn list_past_the_end_is_empty() {
        assert!(catalog().list(10, 100).await.unwrap().is_empty());
        assert!(catalog().list(i64::MAX, i64::MAX).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_rejects_bad_pagination() {
        for (page, size) in [(-1, 10), (0, 0), (0, -5), (-3, 0)] {
            let err = catalog().list(page, size).await.unwrap_err();
            assert!(
                matches!(err, DomainError::Validation(_)),
                "page={page} size={size} gave {err:?}"
            );
        }
    }

    #[test]
    fn from_json_rejects_malformed_catalog() {
        assert!(InMemoryProductRepository::from_json("{\"id\": 1}").is_err());
    }
}
