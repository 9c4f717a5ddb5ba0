// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::orders::OrderCommandService,
        dto::{AuthContext, AuthRejection},
        ports::{security::AuthProvider, time::Clock},
        queries::products::ProductQueryService,
    },
    domain::{coupon::CouponRepository, order::OrderRepository, product::ProductRepository},
};

pub struct ApplicationServices {
    pub order_commands: Arc<OrderCommandService>,
    pub product_queries: Arc<ProductQueryService>,
    auth_provider: Arc<dyn AuthProvider>,
    clock: Arc<dyn Clock>,
}

impl ApplicationServices {
    pub fn new(
        product_repo: Arc<dyn ProductRepository>,
        order_repo: Arc<dyn OrderRepository>,
        coupon_repo: Arc<dyn CouponRepository>,
        auth_provider: Arc<dyn AuthProvider>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let order_commands = Arc::new(OrderCommandService::new(
            Arc::clone(&order_repo),
            Arc::clone(&product_repo),
            Arc::clone(&coupon_repo),
        ));
        let product_queries = Arc::new(ProductQueryService::new(Arc::clone(&product_repo)));

        Self {
            order_commands,
            product_queries,
            auth_provider,
            clock,
        }
    }

    /// Resolve a presented credential and check its validity window against
    /// the current time.
    ///
    /// Scope checks are per-route and happen later against the returned
    /// context, see [`AuthContext::require_scope`].
    pub async fn authenticate(
        &self,
        credential: Option<&str>,
    ) -> Result<AuthContext, AuthRejection> {
        let credential = credential.ok_or(AuthRejection::MissingCredential)?;
        let token = self
            .auth_provider
            .lookup(credential)
            .await
            .ok_or(AuthRejection::UnknownCredential)?;

        token.validate(self.clock.now())?;
        Ok(AuthContext::new(token))
    }
}
