use crate::auth::SessionClient;
use anyhow::Result;
use tracing::instrument;

/// Never fails on the network: the navigation always happens.
/// # Errors
/// Returns an error only if the client has no navigator.
#[instrument(skip(client))]
pub async fn execute(client: &SessionClient, redirect_to: Option<&str>) -> Result<()> {
    client.sign_out(redirect_to).await?;
    Ok(())
}
