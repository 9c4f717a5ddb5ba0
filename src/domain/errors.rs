// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("constraint violated: {0}")]
    Constraint(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    /// The message without the category prefix added by `Display`.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(msg)
            | Self::NotFound(msg)
            | Self::Constraint(msg)
            | Self::Persistence(msg) => msg,
        }
    }
}
