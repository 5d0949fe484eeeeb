pub mod health;
pub mod resume;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/ai-enhance", post(resume::handle_enhance))
        .route("/save-resume", post(resume::handle_save))
        .route("/get-resume", get(resume::handle_get))
        .route("/export-resume/:format", post(resume::handle_export))
        .route("/upload-resume", post(resume::handle_upload))
        .with_state(state)
}
