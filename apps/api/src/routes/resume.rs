//! Axum route handlers for the resume editor API.

use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::enhance::{enhance, enhance_text, FieldContent, RandomPicker};
use crate::errors::AppError;
use crate::models::ResumeRecord;
use crate::parsing::{extract_lines, parse, DocumentKind};
use crate::render::{render_flow, render_page, ExportFormat, RenderError};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct EnhanceRequest {
    pub section: String,
    pub content: FieldContent,
}

#[derive(Debug, Serialize)]
pub struct EnhanceResponse {
    pub enhanced: FieldContent,
}

#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub status: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /ai-enhance
///
/// Prefixes the section's content with template phrases. Never fails: unknown
/// sections and undecodable content come back unchanged.
pub async fn handle_enhance(Json(request): Json<EnhanceRequest>) -> Json<EnhanceResponse> {
    debug!(section = %request.section, content = ?request.content, "Enhance request");
    let mut picker = RandomPicker::thread();
    let enhanced = match request.content {
        FieldContent::Text(text) => {
            FieldContent::Text(enhance_text(&request.section, &text, &mut picker))
        }
        list => enhance(&request.section, list, &mut picker),
    };
    debug!(enhanced = ?enhanced, "Enhance result");
    Json(EnhanceResponse { enhanced })
}

/// POST /save-resume
pub async fn handle_save(
    State(state): State<AppState>,
    Json(record): Json<ResumeRecord>,
) -> Result<Json<SaveResponse>, AppError> {
    state.store.save(&record).await?;
    Ok(Json(SaveResponse {
        status: "Resume saved successfully",
    }))
}

/// GET /get-resume
///
/// Returns the last saved record, or an empty record if nothing was saved.
pub async fn handle_get(State(state): State<AppState>) -> Result<Json<ResumeRecord>, AppError> {
    let record = state.store.load().await?.unwrap_or_default();
    Ok(Json(record))
}

/// POST /export-resume/:format
///
/// `json` echoes the record; `docx` and `pdf` stream a rendered attachment.
pub async fn handle_export(
    Path(format): Path<String>,
    Json(record): Json<ResumeRecord>,
) -> Result<Response, AppError> {
    let format: ExportFormat = format.parse()?;

    let renderer: fn(&ResumeRecord) -> Result<Vec<u8>, RenderError> = match format {
        ExportFormat::Json => return Ok(Json(record).into_response()),
        ExportFormat::Docx => render_flow,
        ExportFormat::Pdf => render_page,
    };

    let filename = format!("{}.{}", record.export_stem(), format.extension());
    let bytes = tokio::task::spawn_blocking(move || renderer(&record))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in render: {e}")))??;

    info!(format = format.extension(), size = bytes.len(), "Resume exported");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        Bytes::from(bytes),
    )
        .into_response())
}

/// POST /upload-resume
///
/// Accepts a multipart `file` (DOCX or PDF), extracts its lines and parses them.
pub async fn handle_upload(mut multipart: Multipart) -> Result<Json<ResumeRecord>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().map(String::from);
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;

        let kind = DocumentKind::detect(filename.as_deref(), &data)?;
        let lines = tokio::task::spawn_blocking(move || extract_lines(&data, kind))
            .await
            .map_err(|e| {
                AppError::Internal(anyhow::anyhow!("spawn_blocking failed in extraction: {e}"))
            })??;

        info!(?kind, lines = lines.len(), "Parsed uploaded resume");
        return Ok(Json(parse(&lines)));
    }

    Err(AppError::Validation("multipart field 'file' is required".to_string()))
}
