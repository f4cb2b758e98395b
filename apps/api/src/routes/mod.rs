pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route(
            "/api/v1/analysis",
            get(handlers::handle_get_session).post(handlers::handle_upload),
        )
        .route("/api/v1/analysis/reset", post(handlers::handle_reset))
        .route(
            "/api/v1/analysis/dashboard",
            get(handlers::handle_dashboard),
        )
        .route("/api/v1/analysis/box-plot", get(handlers::handle_box_plot))
        .route("/api/v1/analysis/export", get(handlers::handle_export))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
