//! Navigation capability injected into the session client. In a browser this
//! wraps `window.location`; headless hosts and tests use [`MemoryNavigator`].

use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Full-page navigation seam.
pub trait Navigator: Send + Sync {
    /// The current page URL, if the host has one.
    fn current_location(&self) -> Option<String>;

    /// Replaces the current page with `url`.
    fn navigate(&self, url: &str);
}

#[derive(Debug, Default)]
struct NavigationState {
    location: Option<String>,
    history: Vec<String>,
}

/// Navigator that records every navigation and tracks the current location.
#[derive(Debug, Default)]
pub struct MemoryNavigator {
    state: Mutex<NavigationState>,
}

impl MemoryNavigator {
    #[must_use]
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            state: Mutex::new(NavigationState {
                location: Some(location.into()),
                history: Vec::new(),
            }),
        }
    }

    /// A navigator with no current location yet.
    #[must_use]
    pub fn detached() -> Self {
        Self::default()
    }

    /// Every navigation target, oldest first.
    #[must_use]
    pub fn history(&self) -> Vec<String> {
        self.lock().history.clone()
    }

    #[must_use]
    pub fn last_navigation(&self) -> Option<String> {
        self.lock().history.last().cloned()
    }

    fn lock(&self) -> MutexGuard<'_, NavigationState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Navigator for MemoryNavigator {
    fn current_location(&self) -> Option<String> {
        self.lock().location.clone()
    }

    fn navigate(&self, url: &str) {
        debug!(url, "navigating");
        let mut state = self.lock();
        state.location = Some(url.to_string());
        state.history.push(url.to_string());
    }
}
