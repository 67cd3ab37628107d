//! # OpsPilot admin client
//!
//! Client-side layer of the OpsPilot user-management admin. It wraps the backend's
//! JSON API and declares the admin's navigable routes.
//!
//! ## Components
//!
//! - [`features::auth::AuthClient`]: submits credentials to `/login`.
//! - [`features::users::UsersClient`]: paginated listing and CRUD against the
//!   `/users_*` endpoints. Update, delete and single fetch refuse a missing id
//!   before any request is sent.
//! - [`routes::RouteTable`]: the static path table (`/` redirects to `/login`,
//!   `/login` and `/users` render their views).
//!
//! Both clients share an [`api::ApiClient`], which owns the HTTP connection pool
//! and the base URL taken from [`api::ApiConfig`]. Nothing else is shared between
//! calls: no cache, no retry, no ordering between concurrent requests.
//!
//! Response bodies are handed back as [`serde_json::Value`] exactly as the server
//! sent them. HTTP failures surface as the underlying [`reqwest::Error`].

pub mod api;
pub mod cli;
pub mod features;
pub mod routes;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub use api::{ApiClient, ApiConfig, ApiError, ResponseBody};
pub use features::auth::{AuthClient, Credentials, LoginOutcome};
pub use features::users::{PageRequest, User, UserId, UsersClient};
pub use routes::{Route, RouteTable, RouteTarget, View};
