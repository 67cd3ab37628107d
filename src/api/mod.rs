//! HTTP transport shared by the feature clients.
//!
//! [`ApiClient`] owns a pooled `reqwest::Client` and the [`ApiConfig`] it was
//! built from. Feature clients hold a clone and call one helper per HTTP verb,
//! so request setup lives in one place. The helpers do not retry, cache, or
//! reinterpret anything: a non-2xx status becomes the `reqwest::Error` from
//! `error_for_status`, and a success body is handed back as JSON.

pub mod config;
pub mod errors;

pub use config::{ApiConfig, API_URL_ENV, DEFAULT_API_BASE_URL};
pub use errors::ApiError;

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info_span, Instrument};

/// Server response body, passed through unexamined.
pub type ResponseBody = Value;

#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    config: Arc<ApiConfig>,
}

impl ApiClient {
    /// Build a client for the given configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder().user_agent(&config.user_agent).build()?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    /// Build a client from `OPSPILOT_API_URL` or the default base URL.
    ///
    /// # Errors
    /// Returns an error if the configured URL is invalid or the HTTP client cannot be built.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(ApiConfig::from_env()?)
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub(crate) async fn get_json<Q>(&self, path: &str, query: &Q) -> Result<ResponseBody, ApiError>
    where
        Q: Serialize + ?Sized,
    {
        let url = self.config.endpoint_url(path);
        let builder = self.client.get(&url).query(query);
        self.execute(Method::GET, &url, builder).await
    }

    pub(crate) async fn post_json<B>(&self, path: &str, body: &B) -> Result<ResponseBody, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.config.endpoint_url(path);
        let builder = self.client.post(&url).json(body);
        self.execute(Method::POST, &url, builder).await
    }

    pub(crate) async fn put_json<B>(&self, path: &str, body: &B) -> Result<ResponseBody, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.config.endpoint_url(path);
        let builder = self.client.put(&url).json(body);
        self.execute(Method::PUT, &url, builder).await
    }

    /// DELETE with a JSON body; some endpoints expect their arguments there rather than in the path.
    pub(crate) async fn delete_json<B>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ResponseBody, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.config.endpoint_url(path);
        let builder = self.client.delete(&url).json(body);
        self.execute(Method::DELETE, &url, builder).await
    }

    async fn execute(
        &self,
        method: Method,
        url: &str,
        builder: RequestBuilder,
    ) -> Result<ResponseBody, ApiError> {
        debug!("{} {}", method, url);

        let span = info_span!("api.request", http.method = %method, url = %url);
        async move {
            let response = builder.send().await?;
            read_body(response).await
        }
        .instrument(span)
        .await
    }
}

async fn read_body(response: Response) -> Result<ResponseBody, ApiError> {
    let response = response.error_for_status()?;
    let text = response.text().await?;
    Ok(parse_body(&text))
}

/// JSON bodies are parsed, anything else is kept verbatim as a string, and an
/// empty body becomes `null`.
fn parse_body(text: &str) -> ResponseBody {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}
