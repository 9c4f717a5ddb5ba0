// src/presentation/http/middleware/authenticate.rs
use super::reject;
use crate::presentation::http::state::HttpState;
use axum::{Extension, extract::Request, middleware::Next, response::Response};

/// Authenticate every request outside the exempt prefixes.
///
/// On success the resolved [`AuthContext`](crate::application::dto::AuthContext)
/// is stored in the request extensions for later per-route scope checks.
pub async fn authenticate(
    Extension(state): Extension<HttpState>,
    mut req: Request,
    next: Next,
) -> Response {
    if state.settings.is_exempt(req.uri().path()) {
        return next.run(req).await;
    }

    let credential = req
        .headers()
        .get(state.settings.auth_header.as_str())
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned());

    match state.services.authenticate(credential.as_deref()).await {
        Ok(context) => {
            req.extensions_mut().insert(context);
            next.run(req).await
        }
        Err(rejection) => reject(&rejection),
    }
}
