use crate::cli::globals::GlobalArgs;
use crate::features::users::{PageRequest, User, UserId, UsersClient};
use anyhow::Result;
use std::fmt;
use tracing::debug;

pub enum Command {
    List(PageRequest),
    Get(UserId),
    Create(User),
    Update(User),
    Delete(UserId),
}

// User payloads may carry a password, so only the id and field names are shown.
impl fmt::Debug for Command {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List(page) => formatter.debug_tuple("List").field(page).finish(),
            Self::Get(id) => formatter.debug_tuple("Get").field(id).finish(),
            Self::Create(user) => payload(formatter, "Create", user),
            Self::Update(user) => payload(formatter, "Update", user),
            Self::Delete(id) => formatter.debug_tuple("Delete").field(id).finish(),
        }
    }
}

fn payload(formatter: &mut fmt::Formatter<'_>, kind: &str, user: &User) -> fmt::Result {
    formatter
        .debug_struct(kind)
        .field("id", &user.id)
        .field("fields", &user.fields.keys().collect::<Vec<_>>())
        .finish()
}

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub command: Command,
}

/// Run one users command and render the response body.
/// # Errors
/// Returns an error if the API client cannot be built, a precondition fails, or the request fails.
pub async fn execute(args: Args) -> Result<String> {
    let client = UsersClient::new(args.globals.api_client()?);
    debug!("users command: {:?}", args.command);

    let body = match &args.command {
        Command::List(page) => client.list_users(page).await?,
        Command::Get(id) => client.get_user(id.clone()).await?,
        Command::Create(user) => client.create_user(user).await?,
        Command::Update(user) => client.update_user(user).await?,
        Command::Delete(id) => client.delete_user(id.clone()).await?,
    };

    Ok(serde_json::to_string_pretty(&body)?)
}
