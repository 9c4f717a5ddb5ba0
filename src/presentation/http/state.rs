// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::{sync::Arc, time::Duration};

pub const DEFAULT_AUTH_HEADER: &str = "api_key";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Transport settings for the router and its middleware.
#[derive(Debug, Clone)]
pub struct HttpSettings {
    /// Header carrying the caller's credential.
    pub auth_header: String,
    /// Path prefixes served without authentication.
    pub exempt_prefixes: Vec<String>,
    pub request_timeout: Duration,
}

impl HttpSettings {
    pub fn is_exempt(&self, path: &str) -> bool {
        self.exempt_prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
    }
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            auth_header: DEFAULT_AUTH_HEADER.to_string(),
            exempt_prefixes: vec!["/product".into(), "/health".into(), "/openapi.json".into()],
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub settings: Arc<HttpSettings>,
}
