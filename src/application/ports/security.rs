// src/application/ports/security.rs
use crate::domain::auth::AuthToken;
use async_trait::async_trait;

/// Resolves a presented credential to the token it stands for.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// `None` when the credential is unknown. Matching is verbatim.
    async fn lookup(&self, credential: &str) -> Option<AuthToken>;
}
