use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;

use crate::features::users::types::UserId;

/// Login credentials. The password is kept secret and redacted from `Debug`.
#[derive(Debug)]
pub struct Credentials {
    pub name: String,
    pub password: SecretString,
}

impl Credentials {
    #[must_use]
    pub fn new(name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            password: SecretString::from(password.into()),
        }
    }

    pub(crate) fn request(&self) -> LoginRequest<'_> {
        LoginRequest {
            name: &self.name,
            password: self.password.expose_secret(),
        }
    }
}

#[derive(Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub name: &'a str,
    pub password: &'a str,
}

/// Reading of a login response body.
///
/// The backend answers a bad login with `200` and an `error` field, so a
/// successful HTTP call does not mean the user is signed in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated {
        id: UserId,
        name: String,
        status_code: Option<String>,
    },
    Rejected(String),
    Unrecognized,
}

impl LoginOutcome {
    #[must_use]
    pub fn from_body(body: &Value) -> Self {
        if let Some(message) = body.get("error").and_then(Value::as_str) {
            return Self::Rejected(message.to_string());
        }

        let id = body
            .get("id")
            .and_then(|id| serde_json::from_value::<UserId>(id.clone()).ok());
        let name = body.get("name").and_then(Value::as_str);

        match (id, name) {
            (Some(id), Some(name)) => Self::Authenticated {
                id,
                name: name.to_string(),
                status_code: body
                    .get("status_code")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            },
            _ => Self::Unrecognized,
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }
}
