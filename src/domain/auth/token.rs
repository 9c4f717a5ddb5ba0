// src/domain/auth/token.rs
use super::value_objects::Scope;
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenValidityError {
    #[error("token presented before valid_from")]
    NotYetValid,
    #[error("token presented after expires_at")]
    Expired,
}

/// Session credential with a validity window and a set of granted scopes.
///
/// The window is taken as given: a token whose `valid_from` lies after its
/// `expires_at` is accepted at construction and rejects every instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken {
    valid_from: DateTime<Utc>,
    expires_at: DateTime<Utc>,
    scopes: HashSet<Scope>,
}

impl AuthToken {
    pub fn new(
        valid_from: DateTime<Utc>,
        expires_at: DateTime<Utc>,
        scopes: impl IntoIterator<Item = Scope>,
    ) -> Self {
        Self {
            valid_from,
            expires_at,
            scopes: scopes.into_iter().collect(),
        }
    }

    /// A token valid from the beginning of time until `expires_at`.
    pub fn until(expires_at: DateTime<Utc>, scopes: impl IntoIterator<Item = Scope>) -> Self {
        Self::new(DateTime::<Utc>::MIN_UTC, expires_at, scopes)
    }

    pub fn valid_from(&self) -> DateTime<Utc> {
        self.valid_from
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub fn scopes(&self) -> &HashSet<Scope> {
        &self.scopes
    }

    /// Checks whether the token may be used at `now`. Both window edges are inclusive.
    pub fn validate(&self, now: DateTime<Utc>) -> Result<(), TokenValidityError> {
        if now < self.valid_from {
            return Err(TokenValidityError::NotYetValid);
        }
        if now > self.expires_at {
            return Err(TokenValidityError::Expired);
        }
        Ok(())
    }

    pub fn has_scope(&self, name: &str) -> bool {
        self.scopes.iter().any(|scope| scope.as_str() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    fn token() -> AuthToken {
        AuthToken::new(
            now() - Duration::hours(1),
            now() + Duration::hours(1),
            [Scope::new(Scope::ORDER_CREATE)],
        )
    }

    #[test]
    fn validate_accepts_instant_inside_window() {
        assert_eq!(token().validate(now()), Ok(()));
    }

    #[test]
    fn validate_accepts_window_edges() {
        let t = token();
        assert!(t.validate(t.valid_from()).is_ok());
        assert!(t.validate(t.expires_at()).is_ok());
    }

    #[test]
    fn validate_rejects_before_valid_from() {
        let err = token().validate(now() - Duration::hours(2)).unwrap_err();
        assert_eq!(err, TokenValidityError::NotYetValid);
    }

    #[test]
    fn validate_rejects_after_expiry() {
        let err = token().validate(now() + Duration::hours(2)).unwrap_err();
        assert_eq!(err, TokenValidityError::Expired);
    }

    #[test]
    fn inverted_window_rejects_every_instant() {
        let t = AuthToken::new(now() + Duration::hours(1), now() - Duration::hours(1), []);
        for offset in [-2, 0, 2] {
            assert!(t.validate(now() + Duration::hours(offset)).is_err());
        }
    }

    #[test]
    fn until_is_valid_for_any_past_instant() {
        let t = AuthToken::until(now(), []);
        assert!(t.validate(Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap()).is_ok());
    }

    #[test]
    fn has_scope_is_exact_membership() {
        let t = token();
        assert!(t.has_scope("order:create"));
        assert!(!t.has_scope("order"));
        assert!(!t.has_scope("order:delete"));
    }
}
