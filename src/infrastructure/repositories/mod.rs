// src/infrastructure/repositories/mod.rs
mod memory_coupon;
mod memory_order;
mod memory_product;

pub use memory_coupon::InMemoryCouponRepository;
pub use memory_order::InMemoryOrderRepository;
pub use memory_product::InMemoryProductRepository;
