// src/infrastructure/repositories/memory_coupon.rs
use crate::domain::coupon::CouponRepository;
use async_trait::async_trait;
use std::collections::HashSet;
use std::io::{self, BufRead};

/// Coupon set shipped with the binary, used when no coupon file is configured.
pub const SAMPLE_COUPONS: &str = include_str!("../../../data/coupons.txt");

#[derive(Debug, Clone, Default)]
pub struct InMemoryCouponRepository {
    codes: HashSet<String>,
}

impl InMemoryCouponRepository {
    pub fn new(codes: impl IntoIterator<Item = String>) -> Self {
        Self {
            codes: codes.into_iter().collect(),
        }
    }

    /// Load newline separated coupon codes. Every line is taken verbatim.
    pub fn from_reader(reader: impl BufRead) -> io::Result<Self> {
        let codes = reader.lines().collect::<io::Result<HashSet<_>>>()?;
        Ok(Self { codes })
    }

    pub fn sample() -> Self {
        Self::new(SAMPLE_COUPONS.lines().map(str::to_string))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

#[async_trait]
impl CouponRepository for InMemoryCouponRepository {
    async fn has(&self, code: &str) -> bool {
        self.codes.contains(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[tokio::test]
    async fn from_reader_loads_one_code_per_line() {
        let repo = InMemoryCouponRepository::from_reader(Cursor::new("OVER9000\nHAPPYHRS\n")).unwrap();
        assert_eq!(repo.len(), 2);
        assert!(repo.has("OVER9000").await);
        assert!(repo.has("HAPPYHRS").await);
        assert!(!repo.has("over9000").await);
    }

    #[tokio::test]
    async fn sample_contains_known_codes() {
        assert!(InMemoryCouponRepository::sample().has("OVER9000").await);
    }
}
