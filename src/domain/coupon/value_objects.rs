use std::fmt;

/// Coupon code as distributed in coupon set files.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CouponCode(String);

impl CouponCode {
    pub const MIN_LEN: usize = 8;
    pub const MAX_LEN: usize = 10;

    /// Returns `None` for codes outside the distributed length range.
    /// Length is measured in bytes.
    pub fn parse(value: &str) -> Option<Self> {
        if (Self::MIN_LEN..=Self::MAX_LEN).contains(&value.len()) {
            Some(Self(value.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CouponCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CouponCode> for String {
    fn from(value: CouponCode) -> Self {
        value.0
    }
}
