// src/application/commands/orders/mod.rs
mod create;
mod service;

pub use create::{CreateOrderCommand, CreateOrderCommandBuilder};
pub use service::OrderCommandService;
