// src/presentation/http/error.rs
use crate::application::{
    ApplicationResult,
    error::{ApplicationError, ErrorCategory},
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::error::Error as _;
use utoipa::ToSchema;

pub const CODE_VALIDATION: &str = "validation";
pub const CODE_NOT_FOUND: &str = "missing";
pub const CODE_CONSTRAINT: &str = "constraint";
pub const CODE_BAD_REQUEST: &str = "bad request";
pub const CODE_INTERNAL: &str = "internal";
pub const CODE_TIMEOUT: &str = "timeout";

const INTERNAL_MESSAGE: &str = "internal server error";

/// The only error shape ever written to a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl HttpError {
    /// Translate an application failure, logging it first. Infrastructure
    /// detail is logged and replaced with a generic message.
    pub fn from_error(err: ApplicationError) -> Self {
        match &err {
            ApplicationError::Categorized {
                category, message, ..
            } => {
                match err.source() {
                    Some(detail) => tracing::warn!(error = %err, detail = %detail, "request failed"),
                    None => tracing::warn!(error = %err, "request failed"),
                }
                let (status, code) = match category {
                    ErrorCategory::Validation => (StatusCode::BAD_REQUEST, CODE_VALIDATION),
                    ErrorCategory::NotFound => (StatusCode::NOT_FOUND, CODE_NOT_FOUND),
                    ErrorCategory::Constraint => (StatusCode::UNPROCESSABLE_ENTITY, CODE_CONSTRAINT),
                };
                Self::new(status, code, message.clone())
            }
            ApplicationError::Infrastructure(_) => {
                tracing::error!(error = %err, "request failed with internal error");
                Self::internal()
            }
        }
    }

    /// The request body could not be decoded at all.
    pub fn bad_request(message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::warn!(%message, "rejected malformed request");
        Self::new(StatusCode::BAD_REQUEST, CODE_BAD_REQUEST, message)
    }

    /// The request did not finish within the configured deadline.
    pub fn timeout() -> Self {
        Self::new(
            StatusCode::REQUEST_TIMEOUT,
            CODE_TIMEOUT,
            "request timed out".to_string(),
        )
    }

    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            CODE_INTERNAL,
            INTERNAL_MESSAGE.to_string(),
        )
    }

    fn new(status: StatusCode, code: &'static str, message: String) -> Self {
        Self {
            status,
            code,
            message,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            code: self.code.to_string(),
            message: self.message,
        };
        (self.status, Json(payload)).into_response()
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
