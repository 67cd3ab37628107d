//! Client wrapper for the login endpoint. Credentials go out as a JSON body and
//! the response comes back untouched.

use crate::{
    api::{ApiClient, ApiError, ResponseBody},
    features::auth::types::Credentials,
};

const LOGIN_PATH: &str = "/login";

#[derive(Clone, Debug)]
pub struct AuthClient {
    api: ApiClient,
}

impl AuthClient {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Submits credentials and returns the server body as-is.
    ///
    /// # Errors
    /// Returns the HTTP client's error if the request fails or the server answers non-2xx.
    pub async fn login(&self, credentials: &Credentials) -> Result<ResponseBody, ApiError> {
        self.api.post_json(LOGIN_PATH, &credentials.request()).await
    }
}
