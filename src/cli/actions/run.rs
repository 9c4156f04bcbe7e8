use crate::cli::{
    actions::{session, sign_in, sign_out, status, Action},
    globals::GlobalArgs,
    navigator::TerminalNavigator,
};
use anyhow::Result;
use std::{io, sync::Arc};

/// Execute the provided action.
// This is the single dispatch point for all CLI actions.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action, globals: &GlobalArgs) -> Result<()> {
    let navigator = Arc::new(TerminalNavigator::stdout(globals.location.clone()));
    let client = globals.session_client(navigator)?;

    match action {
        Action::SignIn {
            provider,
            callback_url,
        } => sign_in::execute(&client, provider, callback_url.as_deref()),
        Action::Session => session::execute(&client, &mut io::stdout()).await,
        Action::Status => status::execute(&client, &mut io::stdout()).await,
        Action::SignOut { redirect_to } => sign_out::execute(&client, redirect_to.as_deref()).await,
    }
}
