use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analysis::analyzer::AnalysisError;
use crate::analysis::csv_parser::CsvError;
use crate::analysis::session::SessionBusy;

/// Shown when the upload parses to zero data rows.
pub const EMPTY_DATASET_MESSAGE: &str = "CSV file is empty or contains no data rows.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("{}", EMPTY_DATASET_MESSAGE)]
    EmptyDataset,

    #[error("Invalid file type. Please upload a CSV file.")]
    UnsupportedMediaType,

    #[error("An analysis is already in progress")]
    Busy,

    /// Carries the user-facing message only; the cause has already been logged.
    #[error("{0}")]
    Analysis(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// The message recorded in the session when an upload fails.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Internal(_) => "An unknown error occurred.".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<CsvError> for AppError {
    fn from(e: CsvError) -> Self {
        AppError::Validation(e.to_string())
    }
}

impl From<AnalysisError> for AppError {
    fn from(e: AnalysisError) -> Self {
        AppError::Analysis(e.to_string())
    }
}

impl From<SessionBusy> for AppError {
    fn from(_: SessionBusy) -> Self {
        AppError::Busy
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::EmptyDataset => (
                StatusCode::BAD_REQUEST,
                "EMPTY_DATASET",
                EMPTY_DATASET_MESSAGE.to_string(),
            ),
            AppError::UnsupportedMediaType => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_MEDIA_TYPE",
                self.to_string(),
            ),
            AppError::Busy => (StatusCode::CONFLICT, "ANALYSIS_IN_PROGRESS", self.to_string()),
            AppError::Analysis(msg) => (StatusCode::BAD_GATEWAY, "ANALYSIS_FAILED", msg.clone()),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
