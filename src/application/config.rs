use crate::constants::{
    AUTH_TOKEN_PATH, BOOKS_PATH, DEFAULT_API_HOST, DEFAULT_AUTH_SCHEME, DEFAULT_TIMEOUT_SECS,
};
use crate::error::AppError;
use crate::presentation::book::BookId;
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the catalog API, endpoint paths are appended to it
    pub base_url: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the catalog client
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Scheme written before the token in the `Authorization` header
    pub auth_scheme: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// A `.env` file is loaded first when present. Recognised variables:
    /// `LIBAWESOME_API_HOST`, `LIBAWESOME_AUTH_SCHEME`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Config {
            rest_api: RestApiConfig {
                base_url: get_env_or_default("LIBAWESOME_API_HOST", String::from(DEFAULT_API_HOST)),
            },
            auth_scheme: get_env_or_default(
                "LIBAWESOME_AUTH_SCHEME",
                String::from(DEFAULT_AUTH_SCHEME),
            ),
        }
    }

    /// Configuration pointing at an explicit host, everything else default
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Config {
            rest_api: RestApiConfig {
                base_url: base_url.into(),
            },
            auth_scheme: String::from(DEFAULT_AUTH_SCHEME),
        }
    }

    /// Transport timeout applied to every request, not configurable
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(DEFAULT_TIMEOUT_SECS)
    }

    /// Validates the API host and derives the endpoint URLs
    ///
    /// Must run once at startup. An error here is fatal.
    pub fn validate(&self) -> Result<ApiHost, AppError> {
        if self.auth_scheme.trim().is_empty() || self.auth_scheme.contains(char::is_whitespace) {
            return Err(AppError::Configuration(format!(
                "invalid auth scheme {:?}",
                self.auth_scheme
            )));
        }
        ApiHost::parse(&self.rest_api.base_url)
    }
}

/// Validated API host with its endpoint URLs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiHost {
    base: Url,
    auth_token: Url,
    books: Url,
}

impl ApiHost {
    /// Parses and validates an API host
    ///
    /// The host must be an absolute `http` or `https` URL without query or
    /// fragment. A trailing `/` is added when missing so endpoint paths are
    /// appended to the last segment instead of replacing it.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AppError::Configuration("API host is empty".to_string()));
        }
        let normalized = if trimmed.ends_with('/') {
            trimmed.to_string()
        } else {
            format!("{trimmed}/")
        };

        let base = Url::parse(&normalized)
            .map_err(|e| AppError::Configuration(format!("invalid API host {raw:?}: {e}")))?;

        if !matches!(base.scheme(), "http" | "https") {
            return Err(AppError::Configuration(format!(
                "unsupported scheme {:?} in API host {raw:?}",
                base.scheme()
            )));
        }
        if base.host_str().is_none() {
            return Err(AppError::Configuration(format!(
                "API host {raw:?} has no host name"
            )));
        }
        if base.query().is_some() || base.fragment().is_some() {
            return Err(AppError::Configuration(format!(
                "API host {raw:?} must not carry a query or fragment"
            )));
        }

        let join = |path: &str| {
            base.join(path).map_err(|e| {
                AppError::Configuration(format!("cannot build {path} endpoint from {raw:?}: {e}"))
            })
        };
        let auth_token = join(AUTH_TOKEN_PATH)?;
        let books = join(BOOKS_PATH)?;

        Ok(Self {
            base,
            auth_token,
            books,
        })
    }

    /// Base URL, always ending in `/`
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Login endpoint
    pub fn auth_token_url(&self) -> &Url {
        &self.auth_token
    }

    /// Endpoint of a single book
    pub fn book_url(&self, book_id: BookId) -> String {
        format!("{}{}/", self.books, book_id)
    }
}
