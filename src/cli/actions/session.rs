use crate::auth::SessionClient;
use anyhow::Result;
use std::io::Write;

/// Prints the session response as pretty JSON.
/// # Errors
/// Returns an error if writing to `out` fails.
pub async fn execute(client: &SessionClient, out: &mut impl Write) -> Result<()> {
    let response = client.fetch_session().await;
    writeln!(out, "{}", serde_json::to_string_pretty(&response)?)?;
    Ok(())
}
