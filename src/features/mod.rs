//! Domain-level client features. Each feature owns its endpoint paths and wire
//! types and talks to the backend through the shared [`crate::api::ApiClient`].

pub mod auth;
pub mod users;
