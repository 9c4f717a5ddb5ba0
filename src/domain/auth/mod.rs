pub mod token;
pub mod value_objects;

pub use token::{AuthToken, TokenValidityError};
pub use value_objects::Scope;
