//! Login against the admin backend. The client submits credentials and returns
//! the server body as-is; [`LoginOutcome`] is an opt-in reading of that body.

pub mod client;
pub mod types;

pub use client::AuthClient;
pub use types::{Credentials, LoginOutcome};
