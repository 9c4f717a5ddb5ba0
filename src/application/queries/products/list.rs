use super::ProductQueryService;
use crate::application::{dto::ProductDto, error::ApplicationResult};

pub struct ListProductsQuery {
    pub page: i64,
    pub page_size: i64,
}

impl ListProductsQuery {
    pub const DEFAULT_PAGE_SIZE: i64 = 100;
}

impl Default for ListProductsQuery {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: Self::DEFAULT_PAGE_SIZE,
        }
    }
}

impl ProductQueryService {
    pub async fn list_products(&self, query: ListProductsQuery) -> ApplicationResult<Vec<ProductDto>> {
        let products = self
            .product_repo
            .list(query.page, query.page_size)
            .await?;
        Ok(products.into_iter().map(Into::into).collect())
    }
}
