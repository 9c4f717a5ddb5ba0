// src/config.rs
use crate::presentation::http::state::{DEFAULT_AUTH_HEADER, DEFAULT_REQUEST_TIMEOUT, HttpSettings};
use std::{env, path::PathBuf, str::FromStr, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    request_timeout: Duration,
    log_format: LogFormat,
    products_path: Option<PathBuf>,
    coupons_path: Option<PathBuf>,
    auth_header: String,
    exempt_prefixes: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Invalid(format!(
                "LOG_FORMAT must be `pretty` or `json`, got `{other}`"
            ))),
        }
    }
}

fn default_listen_addr() -> String {
    "0.0.0.0:8080".into()
}

fn default_exempt_prefixes() -> Vec<String> {
    HttpSettings::default().exempt_prefixes
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

impl AppConfig {
    /// Build configuration from environment variables. Uses sensible defaults
    /// for optional values and validates the rest.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_source(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_source(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let listen_addr = get("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let request_timeout_secs = match get("REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                ConfigError::Invalid(format!("REQUEST_TIMEOUT_SECS must be an integer, got `{raw}`"))
            })?,
            None => DEFAULT_REQUEST_TIMEOUT.as_secs(),
        };
        if request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "REQUEST_TIMEOUT_SECS must be greater than zero".into(),
            ));
        }

        let log_format = get("LOG_FORMAT")
            .map(|raw| raw.parse::<LogFormat>())
            .transpose()?
            .unwrap_or_default();

        let auth_header = get("AUTH_HEADER").unwrap_or_else(|| DEFAULT_AUTH_HEADER.to_string());
        if auth_header.trim().is_empty() {
            return Err(ConfigError::Missing("AUTH_HEADER"));
        }

        let exempt_prefixes = get("AUTH_EXEMPT_PREFIXES")
            .map(|raw| split_list(&raw))
            .unwrap_or_else(default_exempt_prefixes);

        Ok(Self {
            listen_addr,
            request_timeout: Duration::from_secs(request_timeout_secs),
            log_format,
            products_path: get("PRODUCTS_PATH").map(PathBuf::from),
            coupons_path: get("COUPONS_PATH").map(PathBuf::from),
            auth_header,
            exempt_prefixes,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    pub fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// JSON product catalog to serve instead of the bundled sample.
    pub fn products_path(&self) -> Option<&PathBuf> {
        self.products_path.as_ref()
    }

    /// Newline separated coupon codes to accept instead of the bundled sample.
    pub fn coupons_path(&self) -> Option<&PathBuf> {
        self.coupons_path.as_ref()
    }

    pub fn http_settings(&self) -> HttpSettings {
        HttpSettings {
            auth_header: self.auth_header.clone(),
            exempt_prefixes: self.exempt_prefixes.clone(),
            request_timeout: self.request_timeout,
        }
    }
}
