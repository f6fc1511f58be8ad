//! Shared application state — injected into every handler via `axum::extract::State`.

use std::sync::Arc;

use crate::{config::Config, mail::Mailer};

/// Application-wide state passed via axum `State<AppState<M>>`.
///
/// The config is read once at startup and never mutated; the mailer is the
/// delivery collaborator, swapped for a mock in tests.
pub struct AppState<M> {
    pub config: Arc<Config>,
    pub mailer: Arc<M>,
}

impl<M: Mailer> AppState<M> {
    pub fn new(config: Config, mailer: M) -> Self {
        Self { config: Arc::new(config), mailer: Arc::new(mailer) }
    }
}

// Not derived: `M` itself need not be `Clone`.
impl<M> Clone for AppState<M> {
    fn clone(&self) -> Self {
        Self { config: Arc::clone(&self.config), mailer: Arc::clone(&self.mailer) }
    }
}
