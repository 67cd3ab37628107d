//! User management: paginated listing and CRUD. The only local validation is the
//! id check on calls that address an existing user.

pub mod client;
pub mod types;

pub use client::UsersClient;
pub use types::{PageRequest, User, UserId};
