use anyhow::Result;
use opspilot_admin::cli::start;

// Main function
#[tokio::main]
async fn main() -> Result<()> {
    // Parse arguments and set up logging
    let action = start()?;

    // Handle the action
    action.execute().await?;

    Ok(())
}
