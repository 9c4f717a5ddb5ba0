// src/presentation/http/middleware/require_scope.rs
use super::reject;
use crate::application::dto::{AuthContext, AuthRejection};
use axum::{extract::Request, middleware::Next, response::Response};

/// Middleware function that enforces a single scope on one route.
///
/// Usage: `axum::middleware::from_fn(|req, next| require_scope(req, next, "order:create"))`
///
/// Must run behind [`authenticate`](super::authenticate); a missing
/// context is treated as forbidden.
pub async fn require_scope(req: Request, next: Next, scope: &'static str) -> Response {
    let Some(context) = req.extensions().get::<AuthContext>() else {
        return reject(&AuthRejection::MissingContext);
    };

    if let Err(rejection) = context.require_scope(scope) {
        return reject(&rejection);
    }

    next.run(req).await
}
