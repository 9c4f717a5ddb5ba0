// src/infrastructure/security/mod.rs
pub mod static_auth;

pub use static_auth::StaticAuthProvider;
