//! Terminal stand-in for browser navigation: the target URL is written out
//! for the user to open.

use crate::auth::Navigator;
use std::{
    io::{self, Stdout, Write},
    sync::{Mutex, PoisonError},
};
use tracing::{info, warn};

pub struct TerminalNavigator<W: Write + Send = Stdout> {
    location: Option<String>,
    out: Mutex<W>,
}

impl TerminalNavigator {
    #[must_use]
    pub fn stdout(location: Option<String>) -> Self {
        Self::new(location, io::stdout())
    }
}

impl<W: Write + Send> TerminalNavigator<W> {
    pub fn new(location: Option<String>, out: W) -> Self {
        Self {
            location,
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> Navigator for TerminalNavigator<W> {
    fn current_location(&self) -> Option<String> {
        self.location.clone()
    }

    fn navigate(&self, url: &str) {
        info!(url, "navigate");
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(err) = writeln!(out, "Navigate to: {url}") {
            warn!("failed to write navigation target: {err}");
        }
    }
}
