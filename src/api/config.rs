//! Client configuration for the admin API. The base URL is injected explicitly so
//! tests and alternate deployments never need to touch process-wide state; the
//! environment is consulted only by [`ApiConfig::from_env`].

use super::errors::ApiError;
use tracing::debug;
use url::Url;

/// Base URL used when no override is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:7000/api";
/// Environment variable that overrides the API base URL.
pub const API_URL_ENV: &str = "OPSPILOT_API_URL";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: Url,
    pub user_agent: String,
}

impl ApiConfig {
    /// Build a configuration for an explicit base URL.
    ///
    /// # Errors
    /// Returns an error if `base_url` does not parse or is not http(s).
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url.trim())?;

        match base_url.scheme() {
            "http" | "https" => {}
            scheme => return Err(ApiError::UnsupportedScheme(scheme.to_string())),
        }

        Ok(Self {
            base_url,
            user_agent: default_user_agent(),
        })
    }

    /// Load the base URL from `OPSPILOT_API_URL`, falling back to the default.
    /// Blank values count as unset.
    ///
    /// # Errors
    /// Returns an error if the configured value is not a valid http(s) URL.
    pub fn from_env() -> Result<Self, ApiError> {
        let configured = std::env::var(API_URL_ENV)
            .ok()
            .and_then(|value| normalize_env_value(&value));

        match configured {
            Some(value) => {
                debug!("API base URL from {}: {}", API_URL_ENV, value);
                Self::new(&value)
            }
            None => Self::new(DEFAULT_API_BASE_URL),
        }
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Joins `path` onto the base URL, keeping any base path prefix such as `/api`.
    #[must_use]
    pub fn endpoint_url(&self, path: &str) -> String {
        build_url_with_base(self.base_url.as_str(), path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_API_BASE_URL)
                .unwrap_or_else(|_| unreachable!("default API base URL is valid")),
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    let version = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    match crate::built_info::GIT_COMMIT_HASH_SHORT {
        Some(hash) => format!("{version} ({hash})"),
        None => version,
    }
}

fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

pub(crate) fn normalize_env_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
