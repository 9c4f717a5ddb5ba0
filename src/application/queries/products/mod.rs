mod get_by_id;
mod list;
mod service;

pub use get_by_id::GetProductByIdQuery;
pub use list::ListProductsQuery;
pub use service::ProductQueryService;
