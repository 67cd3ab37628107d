pub mod login;
pub mod routes;
pub mod users;

// Internal "interpreter" for `Action`; the match lives in `run` so this module stays small.
mod run;

#[derive(Debug)]
pub enum Action {
    Login(login::Args),
    Users(users::Args),
    Routes(routes::Args),
}

impl Action {
    /// Execute the action and print its output.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self) -> anyhow::Result<()> {
        run::execute(self).await
    }
}
