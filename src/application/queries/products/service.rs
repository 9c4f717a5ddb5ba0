use std::sync::Arc;

use crate::domain::product::ProductRepository;

pub struct ProductQueryService {
    pub(super) product_repo: Arc<dyn ProductRepository>,
}

impl ProductQueryService {
    pub fn new(product_repo: Arc<dyn ProductRepository>) -> Self {
        Self { product_repo }
    }
}
