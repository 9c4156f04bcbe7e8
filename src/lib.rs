//! # Vineyard
//!
//! Showcase components and a thin session client for the Grove ecosystem.
//!
//! ## Session Client
//!
//! [`auth::SessionClient`] talks to a single remote authentication origin
//! (`https://auth-api.grove.place` unless configured otherwise):
//!
//! 1. **Sign in:** navigates to `/api/auth/sign-in/{provider}?callbackURL=...`.
//! 2. **Session:** `GET /api/auth/session` with cookies; any failure reads as
//!    "signed out" and is reported to a [`auth::DiagnosticSink`].
//! 3. **Sign out:** `POST /api/auth/sign-out` with cookies, then navigates to
//!    the redirect target whatever the request outcome was.
//!
//! Navigation goes through an injected [`auth::Navigator`]. A client without
//! one has no page to navigate and refuses the browser-only operations.
//!
//! ## Components
//!
//! [`components`] holds the typed view models for layout, feature cards,
//! status badges, tier gates, the auth button, and the user menu. Rendering is
//! left to the host UI.

pub mod auth;
pub mod cli;
pub mod components;
pub mod config;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
