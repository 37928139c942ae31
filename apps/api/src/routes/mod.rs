pub mod health;
pub mod templates;

use axum::{
    extract::DefaultBodyLimit,
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::download::handlers::handle_download;
use crate::errors::AppError;
use crate::portfolio::handlers::{handle_preview, handle_validate};
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.body_limit();

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/templates", get(templates::list_templates))
        .route("/api/preview", post(handle_preview))
        .route("/api/validate", post(handle_validate))
        .route("/api/download", post(handle_download))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
