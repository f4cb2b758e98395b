//! Session state — the single owner of the current analysis, busy flag and error.
//!
//! Transitions: idle → loading → {success, failure} → idle on reset.
//! An outcome only lands if it belongs to the current attempt; a reset or a
//! newer upload makes the pending one stale.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::models::employee::AnalysisResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Idle,
    Loading,
    Success,
    Failure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("an analysis is already in progress")]
pub struct SessionBusy;

/// Whether a finished attempt was applied to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Stale,
}

/// Serializable snapshot of the session, as returned to clients.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub status: SessionStatus,
    pub attempt_id: Option<Uuid>,
    pub result: Option<AnalysisResult>,
    pub error: Option<String>,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
}

#[derive(Debug)]
pub struct Session {
    status: SessionStatus,
    attempt: Option<Uuid>,
    result: Option<AnalysisResult>,
    error: Option<String>,
    started_at: Option<DateTime<Utc>>,
    finished_at: Option<DateTime<Utc>>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            status: SessionStatus::Idle,
            attempt: None,
            result: None,
            error: None,
            started_at: None,
            finished_at: None,
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Starts a new attempt, clearing any previous result and error.
    pub fn begin(&mut self) -> Result<Uuid, SessionBusy> {
        if self.status == SessionStatus::Loading {
            return Err(SessionBusy);
        }
        let attempt = Uuid::new_v4();
        self.status = SessionStatus::Loading;
        self.attempt = Some(attempt);
        self.result = None;
        self.error = None;
        self.started_at = Some(Utc::now());
        self.finished_at = None;
        Ok(attempt)
    }

    pub fn succeed(&mut self, attempt: Uuid, result: AnalysisResult) -> Outcome {
        if !self.is_current(attempt) {
            return Outcome::Stale;
        }
        self.status = SessionStatus::Success;
        self.result = Some(result);
        self.finished_at = Some(Utc::now());
        Outcome::Applied
    }

    pub fn fail(&mut self, attempt: Uuid, message: impl Into<String>) -> Outcome {
        if !self.is_current(attempt) {
            return Outcome::Stale;
        }
        self.status = SessionStatus::Failure;
        self.error = Some(message.into());
        self.finished_at = Some(Utc::now());
        Outcome::Applied
    }

    /// Records an upload rejected before any attempt started (bad file type,
    /// unreadable bytes). Ignored while an attempt is in flight.
    pub fn reject(&mut self, message: impl Into<String>) {
        if self.status == SessionStatus::Loading {
            return;
        }
        self.status = SessionStatus::Failure;
        self.attempt = None;
        self.result = None;
        self.error = Some(message.into());
        self.started_at = None;
        self.finished_at = Some(Utc::now());
    }

    /// Returns to idle. A pending attempt keeps running but its outcome is dropped.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            status: self.status,
            attempt_id: self.attempt,
            result: self.result.clone(),
            error: self.error.clone(),
            started_at: self.started_at,
            finished_at: self.finished_at,
        }
    }

    fn is_current(&self, attempt: Uuid) -> bool {
        self.status == SessionStatus::Loading && self.attempt == Some(attempt)
    }
}
