use crate::api::{config::normalize_env_value, DEFAULT_API_BASE_URL};
use crate::cli::{
    actions::{login, routes, users, Action},
    globals::GlobalArgs,
};
use crate::features::{
    auth::Credentials,
    users::{PageRequest, User, UserId},
};
use anyhow::{anyhow, Context, Result};
use clap::ArgMatches;

/// # Errors
/// Returns an error if required arguments are missing or a JSON payload is invalid.
pub fn handler(matches: &ArgMatches) -> Result<Action> {
    // A blank --api-url / OPSPILOT_API_URL counts as unset.
    let api_url = matches
        .get_one::<String>("api-url")
        .and_then(|value| normalize_env_value(value))
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    let globals = GlobalArgs::new(api_url);

    match matches.subcommand() {
        Some(("login", sub_m)) => {
            let name = required(sub_m, "name")?;
            let password = required(sub_m, "password")?;
            Ok(Action::Login(login::Args {
                globals,
                credentials: Credentials::new(name, password),
            }))
        }
        Some(("users", sub_m)) => Ok(Action::Users(users::Args {
            globals,
            command: users_command(sub_m)?,
        })),
        Some(("routes", sub_m)) => Ok(Action::Routes(routes::Args {
            path: sub_m.get_one::<String>("path").cloned(),
        })),
        _ => Err(anyhow!("missing subcommand")),
    }
}

fn users_command(matches: &ArgMatches) -> Result<users::Command> {
    match matches.subcommand() {
        Some(("list", sub_m)) => {
            let mut page = PageRequest::new(
                sub_m.get_one::<u32>("page-index").copied().unwrap_or(0),
                sub_m.get_one::<u32>("page-size").copied().unwrap_or(10),
            );
            if let Some(status) = sub_m.get_one::<String>("status") {
                page = page.with_status(status);
            }
            if let Some(column) = sub_m.get_one::<String>("sort-by") {
                page = page.sorted_by(column, sub_m.get_flag("descending"));
            }
            Ok(users::Command::List(page))
        }
        Some(("get", sub_m)) => Ok(users::Command::Get(UserId::parse(&required(sub_m, "id")?))),
        Some(("create", sub_m)) => Ok(users::Command::Create(user_json(sub_m)?)),
        Some(("update", sub_m)) => Ok(users::Command::Update(user_json(sub_m)?)),
        Some(("delete", sub_m)) => Ok(users::Command::Delete(UserId::parse(&required(
            sub_m, "id",
        )?))),
        _ => Err(anyhow!("missing users subcommand")),
    }
}

fn required(matches: &ArgMatches, name: &str) -> Result<String> {
    matches
        .get_one::<String>(name)
        .cloned()
        .with_context(|| format!("missing required argument: --{name}"))
}

fn user_json(matches: &ArgMatches) -> Result<User> {
    let raw = required(matches, "json")?;
    let value = serde_json::from_str(&raw).context("--json is not valid JSON")?;
    User::from_value(value).context("--json must be a JSON object")
}
