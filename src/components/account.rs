//! Props for the sign-in button and the user menu. Both sit on top of the
//! session client: the button triggers a sign-in navigation, the menu renders
//! a session snapshot and triggers sign-out.

use crate::auth::{AuthError, Provider, SessionClient, SessionResponse, User};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthButtonProps {
    #[serde(default)]
    pub provider: Provider,
    /// Defaults to the current page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl AuthButtonProps {
    #[must_use]
    pub fn label(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| format!("Sign in with {}", self.provider.display_name()))
    }

    /// Click handler.
    /// # Errors
    /// Propagates [`SessionClient::sign_in`] errors.
    pub fn activate(&self, client: &SessionClient) -> Result<(), AuthError> {
        client.sign_in(self.provider, self.callback_url.as_deref())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMenuProps {
    #[serde(default)]
    pub user: Option<User>,
    /// Where sign-out lands; `/` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign_out_redirect: Option<String>,
}

impl UserMenuProps {
    #[must_use]
    pub fn from_session(session: &SessionResponse) -> Self {
        Self {
            user: session.user.clone(),
            sign_out_redirect: None,
        }
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Name, falling back to email for accounts without one.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        let user = self.user.as_ref()?;
        let name = user.name.trim();
        Some(if name.is_empty() { user.email.as_str() } else { name })
    }

    /// Up to two uppercase initials for the avatar fallback.
    #[must_use]
    pub fn initials(&self) -> String {
        let Some(display) = self.display_name() else {
            return String::new();
        };

        let initials: String = display
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();

        if initials.is_empty() {
            "?".to_string()
        } else {
            initials
        }
    }

    #[must_use]
    pub fn avatar_url(&self) -> Option<&str> {
        self.user
            .as_ref()
            .and_then(|user| user.image.as_deref())
            .filter(|url| !url.is_empty())
    }

    /// Sign-out handler.
    /// # Errors
    /// Propagates [`SessionClient::sign_out`] errors.
    pub async fn sign_out(&self, client: &SessionClient) -> Result<(), AuthError> {
        client.sign_out(self.sign_out_redirect.as_deref()).await
    }
}
