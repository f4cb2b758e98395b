//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use bytes::Bytes;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::box_plot::{experience_box_plots, BoxPlotData};
use crate::analysis::csv_parser::parse_csv;
use crate::analysis::dashboard::Dashboard;
use crate::analysis::export::{export_csv, EXPORT_FILENAME};
use crate::analysis::session::{Outcome, SessionView};
use crate::errors::AppError;
use crate::models::employee::AnalysisResult;
use crate::state::AppState;

/// Multipart field carrying the CSV upload.
const FILE_FIELD: &str = "file";
const CSV_MIME_TYPE: &str = "text/csv";

/// POST /api/v1/analysis
///
/// Upload → parse → model call, awaited in full. Only one analysis runs at a time.
/// The analysis runs on its own task, so a client disconnect neither cancels the
/// model call nor leaves the session loading.
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<SessionView>, AppError> {
    let csv_text = match read_csv_upload(multipart).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Upload rejected: {e}");
            state.session().reject(e.user_message());
            return Err(e);
        }
    };

    let attempt = state.session().begin()?;
    info!(attempt_id = %attempt, bytes = csv_text.len(), "Starting compensation analysis");

    let task_state = state.clone();
    let task = tokio::spawn(async move {
        let outcome = run_analysis(&task_state, &csv_text).await;
        record_outcome(&task_state, attempt, outcome)
    });

    match task.await {
        Ok(response) => response,
        Err(e) => {
            let err = AppError::Internal(anyhow::anyhow!("analysis task failed: {e}"));
            state.session().fail(attempt, err.user_message());
            Err(err)
        }
    }
}

async fn run_analysis(state: &AppState, csv_text: &str) -> Result<AnalysisResult, AppError> {
    let employees = parse_csv(csv_text).map_err(|e| {
        warn!("CSV validation failed: {e}");
        AppError::from(e)
    })?;
    if employees.is_empty() {
        return Err(AppError::EmptyDataset);
    }

    info!(employees = employees.len(), "CSV parsed, requesting analysis");
    Ok(state.analyzer.analyze(&employees).await?)
}

fn record_outcome(
    state: &AppState,
    attempt: Uuid,
    outcome: Result<AnalysisResult, AppError>,
) -> Result<Json<SessionView>, AppError> {
    let mut session = state.session();
    match outcome {
        Ok(result) => {
            if session.succeed(attempt, result) == Outcome::Stale {
                warn!(attempt_id = %attempt, "Discarding analysis result after reset");
            }
            Ok(Json(session.view()))
        }
        Err(e) => {
            if session.fail(attempt, e.user_message()) == Outcome::Stale {
                warn!(attempt_id = %attempt, "Discarding analysis failure after reset");
            }
            Err(e)
        }
    }
}

/// Pulls the `file` part out of the form and checks it is UTF-8 `text/csv`.
async fn read_csv_upload(mut multipart: Multipart) -> Result<String, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart upload: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let is_csv = field
            .content_type()
            .and_then(|mime| mime.split(';').next())
            .is_some_and(|essence| essence.trim().eq_ignore_ascii_case(CSV_MIME_TYPE));
        if !is_csv {
            return Err(AppError::UnsupportedMediaType);
        }

        let data = field
            .bytes()
            .await
            .map_err(|_| AppError::Validation("Failed to read the file.".to_string()))?;
        return String::from_utf8(data.to_vec())
            .map_err(|_| AppError::Validation("Failed to read the file.".to_string()));
    }

    Err(AppError::Validation(format!(
        "Missing '{FILE_FIELD}' field in upload"
    )))
}

/// GET /api/v1/analysis
pub async fn handle_get_session(State(state): State<AppState>) -> Json<SessionView> {
    Json(state.session().view())
}

/// POST /api/v1/analysis/reset
///
/// Does not abort a pending model call; its outcome is dropped when it lands.
pub async fn handle_reset(State(state): State<AppState>) -> StatusCode {
    state.session().reset();
    info!("Session reset");
    StatusCode::NO_CONTENT
}

/// GET /api/v1/analysis/dashboard
pub async fn handle_dashboard(State(state): State<AppState>) -> Result<Json<Dashboard>, AppError> {
    let session = state.session();
    let result = session.result().ok_or_else(no_result)?;
    Ok(Json(Dashboard::from_result(result)))
}

/// GET /api/v1/analysis/box-plot
pub async fn handle_box_plot(
    State(state): State<AppState>,
) -> Result<Json<Vec<BoxPlotData>>, AppError> {
    let session = state.session();
    let result = session.result().ok_or_else(no_result)?;
    Ok(Json(experience_box_plots(&result.analyzed_employees)))
}

/// GET /api/v1/analysis/export
///
/// The analyzed table as a CSV attachment.
pub async fn handle_export(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let csv = {
        let session = state.session();
        let result = session.result().ok_or_else(no_result)?;
        export_csv(&result.analyzed_employees)
            .ok_or_else(|| AppError::NotFound("No analyzed employees to export".to_string()))?
    };

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILENAME}\""),
            ),
        ],
        Bytes::from(csv),
    ))
}

fn no_result() -> AppError {
    AppError::NotFound("No analysis result available".to_string())
}
