pub mod repository;
pub mod value_objects;

pub use repository::CouponRepository;
pub use value_objects::CouponCode;
