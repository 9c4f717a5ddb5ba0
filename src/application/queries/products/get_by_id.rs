use super::ProductQueryService;
use crate::application::{dto::ProductDto, error::ApplicationResult};

pub struct GetProductByIdQuery {
    pub id: String,
}

impl ProductQueryService {
    pub async fn get_product_by_id(&self, query: GetProductByIdQuery) -> ApplicationResult<ProductDto> {
        let product = self.product_repo.get(&query.id).await?;
        Ok(product.into())
    }
}
