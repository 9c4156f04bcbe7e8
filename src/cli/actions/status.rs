use crate::auth::SessionClient;
use anyhow::Result;
use std::io::Write;

/// Prints who is signed in, or `signed out`.
/// # Errors
/// Returns an error if writing to `out` fails.
pub async fn execute(client: &SessionClient, out: &mut impl Write) -> Result<()> {
    let response = client.fetch_session().await;
    match (response.user, response.session) {
        (Some(user), Some(session)) => {
            writeln!(out, "authenticated as {} (session {})", user.email, session.id)?;
        }
        (Some(user), None) => writeln!(out, "authenticated as {}", user.email)?,
        (None, _) => writeln!(out, "signed out")?,
    }
    Ok(())
}
