use crate::cli::actions::{login, routes, users, Action};
use anyhow::Result;

/// Execute the provided action.
// Single dispatch point for all CLI actions; each one renders its output and we print it here.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    let output = match action {
        Action::Login(args) => login::execute(args).await?,
        Action::Users(args) => users::execute(args).await?,
        Action::Routes(args) => routes::execute(&args)?,
    };

    println!("{output}");

    Ok(())
}
