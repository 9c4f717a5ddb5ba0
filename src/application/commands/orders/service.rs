// src/application/commands/orders/service.rs
use std::sync::Arc;

use crate::domain::{coupon::CouponRepository, order::OrderRepository, product::ProductRepository};

pub struct OrderCommandService {
    pub(super) order_repo: Arc<dyn OrderRepository>,
    pub(super) product_repo: Arc<dyn ProductRepository>,
    pub(super) coupon_repo: Arc<dyn CouponRepository>,
}

impl OrderCommandService {
    pub fn new(
        order_repo: Arc<dyn OrderRepository>,
        product_repo: Arc<dyn ProductRepository>,
        coupon_repo: Arc<dyn CouponRepository>,
    ) -> Self {
        Self {
            order_repo,
            product_repo,
            coupon_repo,
        }
    }
}
