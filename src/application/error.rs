// src/application/error.rs
use crate::domain::errors::DomainError;
use std::fmt;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Caller-facing failure categories. Anything outside these is an
/// infrastructure failure whose detail never reaches the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Malformed caller input, e.g. bad pagination.
    Validation,
    /// The directly requested resource does not exist.
    NotFound,
    /// Well-formed input that breaks a business rule.
    Constraint,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Validation => "validation",
            ErrorCategory::NotFound => "missing",
            ErrorCategory::Constraint => "constraint",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum ApplicationError {
    /// `message` is safe to echo to the caller; `detail` is for logs only.
    #[error("{category}: {message}")]
    Categorized {
        category: ErrorCategory,
        message: String,
        #[source]
        detail: Option<DomainError>,
    },

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    fn categorized(category: ErrorCategory, msg: impl Into<String>) -> Self {
        Self::Categorized {
            category,
            message: msg.into(),
            detail: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::categorized(ErrorCategory::Validation, msg)
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::categorized(ErrorCategory::NotFound, msg)
    }

    pub fn constraint(msg: impl Into<String>) -> Self {
        Self::categorized(ErrorCategory::Constraint, msg)
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    /// Attaches a log-only cause. No effect on infrastructure failures.
    pub fn with_detail(self, cause: DomainError) -> Self {
        match self {
            Self::Categorized {
                category, message, ..
            } => Self::Categorized {
                category,
                message,
                detail: Some(cause),
            },
            other => other,
        }
    }

    pub fn category(&self) -> Option<ErrorCategory> {
        match self {
            Self::Categorized { category, .. } => Some(*category),
            Self::Infrastructure(_) => None,
        }
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::validation(msg),
            DomainError::NotFound(msg) => Self::not_found(msg),
            DomainError::Constraint(msg) => Self::constraint(msg),
            DomainError::Persistence(msg) => Self::infrastructure(msg),
        }
    }
}
