use crate::domain::auth::{AuthToken, TokenValidityError};
use thiserror::Error;

/// Per-request authentication state, attached once the credential resolves.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub token: AuthToken,
}

impl AuthContext {
    pub fn new(token: AuthToken) -> Self {
        Self { token }
    }

    pub fn require_scope(&self, scope: &str) -> Result<(), AuthRejection> {
        if self.token.has_scope(scope) {
            Ok(())
        } else {
            Err(AuthRejection::MissingScope(scope.to_string()))
        }
    }
}

/// Why a request was turned away by the authorization chain. The reason is
/// logged; callers only ever see the status it maps to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthRejection {
    #[error("request does not contain expected credentials")]
    MissingCredential,
    #[error("unknown credential presented")]
    UnknownCredential,
    #[error("invalid token presented: {0}")]
    InvalidToken(#[from] TokenValidityError),
    #[error("token missing required scope: {0}")]
    MissingScope(String),
    #[error("scope check found no authenticated token, router set up incorrectly")]
    MissingContext,
}

impl AuthRejection {
    /// True when the caller's identity could not be established at all.
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, Self::MissingCredential | Self::UnknownCredential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::Scope;
    use chrono::Utc;

    #[test]
    fn require_scope_reports_missing_scope() {
        let ctx = AuthContext::new(AuthToken::until(Utc::now(), [Scope::new("order:create")]));
        assert!(ctx.require_scope("order:create").is_ok());
        assert_eq!(
            ctx.require_scope("order:cancel"),
            Err(AuthRejection::MissingScope("order:cancel".into()))
        );
    }

    #[test]
    fn only_credential_failures_are_unauthenticated() {
        assert!(AuthRejection::MissingCredential.is_unauthenticated());
        assert!(AuthRejection::UnknownCredential.is_unauthenticated());
        assert!(!AuthRejection::InvalidToken(TokenValidityError::Expired).is_unauthenticated());
        assert!(!AuthRejection::MissingScope("x".into()).is_unauthenticated());
        assert!(!AuthRejection::MissingContext.is_unauthenticated());
    }
}
