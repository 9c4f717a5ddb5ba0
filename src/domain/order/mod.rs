pub mod entity;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use entity::{NewOrder, Order};
pub use repository::OrderRepository;
pub use specifications::WellFormedOrderSpec;
pub use value_objects::{OrderId, OrderItem};
