use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::analysis::analyzer::CompensationAnalyzer;
use crate::analysis::session::Session;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable analyzer. Default: LlmAnalyzer; tests use stubs.
    pub analyzer: Arc<dyn CompensationAnalyzer>,
    /// Never hold the guard across an `.await`.
    session: Arc<Mutex<Session>>,
    pub config: Config,
}

impl AppState {
    pub fn new(analyzer: Arc<dyn CompensationAnalyzer>, config: Config) -> Self {
        Self {
            analyzer,
            session: Arc::new(Mutex::new(Session::new())),
            config,
        }
    }

    /// Locks the session. Session updates never panic midway, so a poisoned
    /// lock still guards a consistent value.
    pub fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
