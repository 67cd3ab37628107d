use crate::api::{ApiClient, ApiConfig};
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub api_url: String,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(api_url: String) -> Self {
        Self { api_url }
    }

    /// Build the shared API client for the configured base URL.
    /// # Errors
    /// Returns an error if the URL is invalid or the HTTP client cannot be built.
    pub fn api_client(&self) -> Result<ApiClient> {
        let config = ApiConfig::new(&self.api_url)
            .with_context(|| format!("invalid API URL: {}", self.api_url))?;
        Ok(ApiClient::new(config)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_args() {
        let globals = GlobalArgs::new("http://localhost:7000/api".to_string());
        assert_eq!(globals.api_url, "http://localhost:7000/api");
        let client = globals.api_client().unwrap();
        assert_eq!(
            client.config().endpoint_url("/login"),
            "http://localhost:7000/api/login"
        );
    }

    #[test]
    fn test_global_args_invalid_url() {
        let globals = GlobalArgs::new("localhost".to_string());
        let err = globals.api_client().unwrap_err();
        assert!(err.to_string().contains("invalid API URL"));
    }
}
