pub mod auth;
pub mod coupon;
pub mod errors;
pub mod order;
pub mod product;
