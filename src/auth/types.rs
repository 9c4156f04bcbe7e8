//! Wire shapes returned by the auth service. They are snapshots of
//! server-asserted state: nothing here is validated or mutated locally, and
//! timestamps stay as the server's strings.

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::{fmt, str::FromStr};

/// OAuth identity providers accepted by the sign-in endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    Google,
    GitHub,
}

impl Provider {
    pub const ALL: [Provider; 2] = [Provider::Google, Provider::GitHub];

    /// Path segment used by `/api/auth/sign-in/{provider}`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Provider::Google => "google",
            Provider::GitHub => "github",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Provider::Google => "Google",
            Provider::GitHub => "GitHub",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "google" => Ok(Provider::Google),
            "github" => Ok(Provider::GitHub),
            other => Err(format!("unsupported provider: {other}")),
        }
    }
}

/// Snapshot of the signed-in user. Every field decodes leniently: missing or
/// `null` values become empty, and non-string scalars keep their JSON text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    /// Avatar URL.
    #[serde(default, deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub email_verified: bool,
    #[serde(default, deserialize_with = "lenient_string")]
    pub created_at: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub updated_at: String,
    /// Fields this crate does not model, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub user_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub expires_at: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub created_at: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of `GET /api/auth/session`. The service sends both halves or neither;
/// that pairing is trusted, not enforced.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResponse {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub session: Option<Session>,
}

impl SessionResponse {
    /// The "no user, no session" sentinel.
    #[must_use]
    pub const fn signed_out() -> Self {
        Self {
            user: None,
            session: None,
        }
    }

    /// Builds a response from any parsed JSON body. A non-null `user` or
    /// `session` is present whatever its shape; a body that is not an object
    /// (including `null`) is the sentinel.
    #[must_use]
    pub fn from_value(body: Value) -> Self {
        let Value::Object(mut fields) = body else {
            return Self::signed_out();
        };

        Self {
            user: take_present(&mut fields, "user"),
            session: take_present(&mut fields, "session"),
        }
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

fn take_present<T: DeserializeOwned + Default>(fields: &mut Map<String, Value>, key: &str) -> Option<T> {
    match fields.remove(key) {
        None | Some(Value::Null) => None,
        Some(value) => Some(serde_json::from_value(value).unwrap_or_default()),
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(lenient_opt_string(deserializer)?.unwrap_or_default())
}

fn lenient_opt_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(value) => Some(value),
        other => Some(other.to_string()),
    })
}

fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(value) => value,
        Value::String(value) => value.eq_ignore_ascii_case("true"),
        _ => false,
    })
}
