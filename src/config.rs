//! Session client configuration with optional environment overrides. The
//! defaults target the production Grove auth origin; `VINEYARD_*` variables
//! let staging deployments and tests point elsewhere without rebuilding.
//! Configuration values are public; session cookies never live here.

use crate::{auth::AuthError, APP_USER_AGENT};
use std::{env, time::Duration};
use url::Url;

/// Production auth origin.
pub const DEFAULT_AUTH_BASE_URL: &str = "https://auth-api.grove.place";
/// Cookie the auth service uses to identify a session.
pub const DEFAULT_SESSION_COOKIE_NAME: &str = "better-auth.session_token";

pub const ENV_AUTH_BASE_URL: &str = "VINEYARD_AUTH_BASE_URL";
pub const ENV_AUTH_TIMEOUT_SECS: &str = "VINEYARD_AUTH_TIMEOUT_SECS";
pub const ENV_SESSION_COOKIE_NAME: &str = "VINEYARD_SESSION_COOKIE_NAME";

/// Settings for a [`SessionClient`](crate::auth::SessionClient).
#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub base_url: Url,
    pub user_agent: String,
    /// `None` leaves requests unbounded, matching browser `fetch`.
    pub timeout: Option<Duration>,
    pub session_cookie_name: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_AUTH_BASE_URL)
                .unwrap_or_else(|err| unreachable!("default auth origin is valid: {err}")),
            user_agent: APP_USER_AGENT.to_string(),
            timeout: None,
            session_cookie_name: DEFAULT_SESSION_COOKIE_NAME.to_string(),
        }
    }
}

impl AuthConfig {
    /// Builds a config for an explicit auth origin.
    /// # Errors
    /// Returns [`AuthError::Config`] if `base_url` is not an http(s) URL with a host.
    pub fn with_base_url(base_url: &str) -> Result<Self, AuthError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            ..Self::default()
        })
    }

    /// Loads defaults and applies `VINEYARD_*` overrides from the environment.
    /// # Errors
    /// Returns [`AuthError::Config`] if an override is present but malformed.
    pub fn from_env() -> Result<Self, AuthError> {
        let mut config = Self::default();
        let overrides = EnvOverrides {
            base_url: read_env(ENV_AUTH_BASE_URL),
            timeout_secs: read_env(ENV_AUTH_TIMEOUT_SECS),
            session_cookie_name: read_env(ENV_SESSION_COOKIE_NAME),
        };
        apply_overrides(&mut config, overrides)?;
        Ok(config)
    }

    /// Base URL without a trailing slash, ready for path concatenation.
    #[must_use]
    pub fn origin(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Joins `path` onto the configured origin.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        build_url_with_base(self.origin(), path)
    }
}

#[derive(Default)]
struct EnvOverrides {
    base_url: Option<String>,
    timeout_secs: Option<String>,
    session_cookie_name: Option<String>,
}

fn apply_overrides(config: &mut AuthConfig, overrides: EnvOverrides) -> Result<(), AuthError> {
    if let Some(value) = overrides.base_url {
        config.base_url = parse_base_url(&value)?;
    }
    if let Some(value) = overrides.timeout_secs {
        let secs = value.parse::<u64>().map_err(|err| {
            AuthError::Config(format!("{ENV_AUTH_TIMEOUT_SECS} must be whole seconds: {err}"))
        })?;
        config.timeout = (secs > 0).then(|| Duration::from_secs(secs));
    }
    if let Some(value) = overrides.session_cookie_name {
        config.session_cookie_name = value;
    }
    Ok(())
}

fn read_env(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|value| normalize_value(&value))
}

fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parses and validates an auth origin.
/// # Errors
/// Returns [`AuthError::Config`] for unparsable URLs, non-http(s) schemes, or missing hosts.
pub fn parse_base_url(value: &str) -> Result<Url, AuthError> {
    let url = Url::parse(value.trim())
        .map_err(|err| AuthError::Config(format!("invalid auth base URL {value:?}: {err}")))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(AuthError::Config(format!(
                "unsupported auth base URL scheme: {scheme}"
            )))
        }
    }

    if url.host().is_none() {
        return Err(AuthError::Config(format!(
            "auth base URL has no host: {value}"
        )));
    }

    Ok(url)
}

fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}
