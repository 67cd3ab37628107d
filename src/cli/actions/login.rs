use crate::cli::globals::GlobalArgs;
use crate::features::auth::{AuthClient, Credentials, LoginOutcome};
use anyhow::Result;
use tracing::{info, warn};

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub credentials: Credentials,
}

/// Submit the credentials and render the response body.
/// # Errors
/// Returns an error if the API client cannot be built or the request fails.
pub async fn execute(args: Args) -> Result<String> {
    let client = AuthClient::new(args.globals.api_client()?);
    let body = client.login(&args.credentials).await?;

    match LoginOutcome::from_body(&body) {
        LoginOutcome::Authenticated { id, .. } => {
            info!("login accepted for {} (id {})", args.credentials.name, id);
        }
        LoginOutcome::Rejected(message) => {
            warn!("login rejected for {}: {}", args.credentials.name, message);
        }
        LoginOutcome::Unrecognized => {}
    }

    Ok(serde_json::to_string_pretty(&body)?)
}
