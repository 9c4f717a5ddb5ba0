pub mod coupon_sets;
pub mod repositories;
pub mod security;
pub mod time;
