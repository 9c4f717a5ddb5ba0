// src/presentation/http/middleware/mod.rs
pub mod authenticate;
pub mod require_scope;

pub use authenticate::authenticate;
pub use require_scope::require_scope;

use crate::application::dto::AuthRejection;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Turn a rejection into a bodyless 401/403. The specific reason only goes
/// to the log so callers cannot tell which check failed.
pub(crate) fn reject(rejection: &AuthRejection) -> Response {
    let status = if rejection.is_unauthenticated() {
        StatusCode::UNAUTHORIZED
    } else {
        StatusCode::FORBIDDEN
    };

    match rejection {
        AuthRejection::MissingContext => {
            tracing::error!(reason = %rejection, status = status.as_u16(), "request rejected");
        }
        _ => tracing::warn!(reason = %rejection, status = status.as_u16(), "request rejected"),
    }

    status.into_response()
}
