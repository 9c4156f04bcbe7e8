pub mod session;
pub mod sign_in;
pub mod sign_out;
pub mod status;

// Internal "interpreter" for `Action`.
mod run;

use crate::{auth::Provider, cli::globals::GlobalArgs};

#[derive(Debug)]
pub enum Action {
    SignIn {
        provider: Provider,
        callback_url: Option<String>,
    },
    Session,
    Status,
    SignOut {
        redirect_to: Option<String>,
    },
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self, globals: &GlobalArgs) -> anyhow::Result<()> {
        run::execute(self, globals).await
    }
}
