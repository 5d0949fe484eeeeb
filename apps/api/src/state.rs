use std::sync::Arc;

use crate::storage::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable record store. Default: FileResumeStore under `Config::data_dir`.
    pub store: Arc<dyn ResumeStore>,
}
