use crate::auth::{AuthError, Provider, SessionClient};
use anyhow::{anyhow, Result};
use tracing::instrument;

/// # Errors
/// Returns an error if there is no callback URL or location to return to, or
/// the callback URL is malformed.
#[instrument(skip(client))]
pub fn execute(client: &SessionClient, provider: Provider, callback_url: Option<&str>) -> Result<()> {
    client.sign_in(provider, callback_url).map_err(|err| match err {
        AuthError::Environment(_) => {
            anyhow!(err).context("sign-in needs --callback-url or --location")
        }
        other => other.into(),
    })
}
