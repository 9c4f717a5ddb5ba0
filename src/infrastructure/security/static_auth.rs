// src/infrastructure/security/static_auth.rs
use crate::application::ports::security::AuthProvider;
use crate::domain::auth::{AuthToken, Scope};
use async_trait::async_trait;
use chrono::{DateTime, Months, Utc};
use std::collections::HashMap;

/// Credential table fixed at construction. Credentials are compared
/// verbatim and never rotated or revoked; only suitable for local use and
/// tests.
#[derive(Debug, Clone, Default)]
pub struct StaticAuthProvider {
    tokens: HashMap<String, AuthToken>,
}

impl StaticAuthProvider {
    pub fn new(tokens: impl IntoIterator<Item = (String, AuthToken)>) -> Self {
        Self {
            tokens: tokens.into_iter().collect(),
        }
    }

    pub fn with_token(mut self, credential: impl Into<String>, token: AuthToken) -> Self {
        self.tokens.insert(credential.into(), token);
        self
    }

    /// Prebaked credentials for exercising every authorization outcome:
    ///
    /// - `apitest`: valid for a year, scope `order:create`
    /// - `noscope`: valid for a year, no scopes
    /// - `tooearly`: becomes valid in a year
    /// - `toolate`: expired a year ago
    pub fn with_test_credentials(now: DateTime<Utc>) -> Self {
        let year_ahead = now.checked_add_months(Months::new(12)).unwrap_or(DateTime::<Utc>::MAX_UTC);
        let year_ago = now.checked_sub_months(Months::new(12)).unwrap_or(DateTime::<Utc>::MIN_UTC);

        Self::default()
            .with_token(
                "apitest",
                AuthToken::until(year_ahead, [Scope::new(Scope::ORDER_CREATE)]),
            )
            .with_token("noscope", AuthToken::until(year_ahead, []))
            .with_token("tooearly", AuthToken::new(year_ahead, year_ahead, []))
            .with_token("toolate", AuthToken::new(year_ago, year_ago, []))
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[async_trait]
impl AuthProvider for StaticAuthProvider {
    async fn lookup(&self, credential: &str) -> Option<AuthToken> {
        self.tokens.get(credential).cloned()
    }
}
