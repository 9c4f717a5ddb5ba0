use async_trait::async_trait;

#[async_trait]
pub trait CouponRepository: Send + Sync {
    async fn has(&self, code: &str) -> bool;
}
