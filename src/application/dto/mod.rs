pub mod auth;
pub mod orders;
pub mod products;

pub use auth::{AuthContext, AuthRejection};
pub use orders::{OrderDto, OrderItemDto};
pub use products::ProductDto;
