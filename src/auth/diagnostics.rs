//! Sinks for failures the session client absorbs. A failed session fetch
//! still reads as "signed out" and a failed sign-out still navigates; the sink
//! is where those failures become visible.

use std::sync::{Mutex, PoisonError};
use tracing::{error, warn};

/// A failure the session client swallowed instead of returning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// `GET /api/auth/session` failed in transport or decoding.
    SessionFetchFailed { url: String, reason: String },
    /// `GET /api/auth/session` answered with a non-success status.
    SessionRejected { url: String, status: u16 },
    /// `POST /api/auth/sign-out` failed in transport.
    SignOutFailed { url: String, reason: String },
    /// `POST /api/auth/sign-out` answered with a non-success status.
    SignOutRejected { url: String, status: u16 },
}

pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: Diagnostic);
}

/// Default sink: logs through `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        match diagnostic {
            Diagnostic::SessionFetchFailed { url, reason } => {
                error!(url = %url, reason = %reason, "Failed to fetch session");
            }
            Diagnostic::SessionRejected { url, status } => {
                warn!(url = %url, status, "Session request rejected");
            }
            Diagnostic::SignOutFailed { url, reason } => {
                error!(url = %url, reason = %reason, "Failed to sign out");
            }
            Diagnostic::SignOutRejected { url, status } => {
                warn!(url = %url, status, "Sign-out request rejected");
            }
        }
    }
}

/// Collects diagnostics in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> Vec<Diagnostic> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl DiagnosticSink for MemorySink {
    fn report(&self, diagnostic: Diagnostic) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic);
    }
}
