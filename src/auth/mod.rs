//! Session client for the Grove auth service. It keeps every call to the auth
//! origin in one place so UI code only ever sees a session snapshot or a
//! navigation. Session cookies are `HttpOnly` on the service side and are
//! never logged here.
//!
//! Flow Overview: sign-in is a full navigation to the provider endpoint with
//! the callback URL percent-encoded. Session lookups are credentialed GETs that
//! read as "signed out" on any failure. Sign-out posts with credentials and
//! navigates away no matter how the POST went.

mod client;
mod diagnostics;
mod error;
mod navigation;
pub mod types;

pub use client::{SessionClient, SessionLookup, SIGN_OUT_DEFAULT_REDIRECT};
pub use diagnostics::{Diagnostic, DiagnosticSink, MemorySink, TracingSink};
pub use error::AuthError;
pub use navigation::{MemoryNavigator, Navigator};
pub use types::{Provider, Session, SessionResponse, User};
