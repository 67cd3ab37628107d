use crate::api::{API_URL_ENV, DEFAULT_API_BASE_URL};
use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        ValueParser,
    },
    Arg, ArgAction, ColorChoice, Command,
};

pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

fn id_arg() -> Arg {
    Arg::new("id")
        .long("id")
        .help("User id (integers are sent as numbers)")
        .required(true)
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .help("User object as JSON, e.g. '{\"name\": \"alice\"}'")
        .required(true)
}

fn users_command() -> Command {
    Command::new("users")
        .about("Manage users")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("list")
                .about("List one page of users")
                .arg(
                    Arg::new("page-index")
                        .long("page-index")
                        .help("Zero-based page index")
                        .default_value("0")
                        .value_parser(clap::value_parser!(u32)),
                )
                .arg(
                    Arg::new("page-size")
                        .long("page-size")
                        .help("Users per page")
                        .default_value("10")
                        .value_parser(clap::value_parser!(u32).range(1..)),
                )
                .arg(
                    Arg::new("status")
                        .long("status")
                        .help("Only users with this status code"),
                )
                .arg(
                    Arg::new("sort-by")
                        .long("sort-by")
                        .help("Column to sort by"),
                )
                .arg(
                    Arg::new("descending")
                        .long("descending")
                        .help("Sort in descending order")
                        .requires("sort-by")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("get").about("Fetch a single user").arg(id_arg()))
        .subcommand(Command::new("create").about("Create a user").arg(json_arg()))
        .subcommand(
            Command::new("update")
                .about("Update a user (the JSON must carry an id)")
                .arg(json_arg()),
        )
        .subcommand(Command::new("delete").about("Delete a user").arg(id_arg()))
}

pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new("opspilot-admin")
        .about("OpsPilot user administration")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .help("Base URL of the admin API")
                .default_value(DEFAULT_API_BASE_URL)
                .env(API_URL_ENV)
                .global(true),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("OPSPILOT_LOG_LEVEL")
                .global(true)
                .action(ArgAction::Count)
                .value_parser(validator_log_level()),
        )
        .subcommand(
            Command::new("login")
                .about("Check credentials against the API")
                .arg(
                    Arg::new("name")
                        .short('n')
                        .long("name")
                        .help("User name")
                        .env("OPSPILOT_USER")
                        .required(true),
                )
                .arg(
                    Arg::new("password")
                        .short('p')
                        .long("password")
                        .help("Password")
                        .env("OPSPILOT_PASSWORD")
                        .hide_env_values(true)
                        .required(true),
                ),
        )
        .subcommand(users_command())
        .subcommand(
            Command::new("routes")
                .about("Print the route table, or where PATH resolves to")
                .arg(Arg::new("path").help("Location to resolve, e.g. /users?page=2")),
        )
}
