pub mod entity;
pub mod repository;

pub use entity::Product;
pub use repository::ProductRepository;
