use thiserror::Error;

/// Errors returned by the API clients.
///
/// Only two kinds reach callers at request time: a local precondition failure
/// raised before anything is sent, and whatever the HTTP client reported.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("missing user id")]
    MissingUserId,
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
    #[error("unsupported API base URL scheme: {0}")]
    UnsupportedScheme(String),
    #[error("invalid JSON payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status carried by a transport failure, if the server answered at all.
    #[must_use]
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Http(err) => err.status(),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::MissingUserId)
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;

    #[test]
    fn missing_user_id_message() {
        let err = ApiError::MissingUserId;
        assert_eq!(err.to_string(), "missing user id");
        assert!(err.is_precondition());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn unsupported_scheme_message() {
        let err = ApiError::UnsupportedScheme("ftp".to_string());
        assert_eq!(err.to_string(), "unsupported API base URL scheme: ftp");
        assert!(!err.is_precondition());
    }
}
