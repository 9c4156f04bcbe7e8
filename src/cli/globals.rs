use crate::{
    auth::{Navigator, SessionClient},
    config::{parse_base_url, AuthConfig},
};
use anyhow::Result;
use secrecy::{ExposeSecret, SecretString};
use std::{sync::Arc, time::Duration};

#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub auth_url: String,
    pub timeout_secs: u64,
    pub cookie_name: String,
    pub session_cookie: Option<SecretString>,
    pub location: Option<String>,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(auth_url: String) -> Self {
        let defaults = AuthConfig::default();
        Self {
            auth_url,
            timeout_secs: 0,
            cookie_name: defaults.session_cookie_name,
            session_cookie: None,
            location: None,
        }
    }

    pub fn set_session_cookie(&mut self, token: SecretString) {
        self.session_cookie = Some(token);
    }

    /// # Errors
    /// Returns an error if `auth_url` is not a usable auth origin.
    pub fn auth_config(&self) -> Result<AuthConfig> {
        Ok(AuthConfig {
            base_url: parse_base_url(&self.auth_url)?,
            timeout: (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs)),
            session_cookie_name: self.cookie_name.clone(),
            ..AuthConfig::default()
        })
    }

    /// Builds a session client wired to `navigator` and the session cookie, if any.
    /// # Errors
    /// Returns an error if the config is invalid or the HTTP client cannot be built.
    pub fn session_client(&self, navigator: Arc<dyn Navigator>) -> Result<SessionClient> {
        let mut client = SessionClient::new(self.auth_config()?)?.with_navigator(navigator);
        if let Some(token) = &self.session_cookie {
            client = client.with_session_cookie(token.expose_secret());
        }
        Ok(client)
    }
}
