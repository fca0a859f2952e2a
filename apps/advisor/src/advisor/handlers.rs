//! Axum route handlers for the Advisor API.

use axum::{
    extract::{Multipart, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::advisor::{analyze, Analysis, DraftSpec, API_PRIMER, DRAFT_SPEC_FILE_NAME, DRAFT_SPEC_MIME};
use crate::errors::AppError;
use crate::extraction::DocumentKind;
use crate::state::AppState;

/// Multipart field carrying the uploaded document.
pub const UPLOAD_FIELD: &str = "file";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub request_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub file_name: Option<String>,
    pub document_kind: Option<DocumentKind>,
    pub extracted_text: String,
    pub primer: &'static str,
    #[serde(flatten)]
    pub analysis: Analysis,
}

struct Upload {
    file_name: Option<String>,
    content_type: Option<String>,
    bytes: Bytes,
}

struct ExtractedUpload {
    file_name: Option<String>,
    kind: DocumentKind,
    text: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Accepts a `.txt` or `.pdf` upload and returns the full analysis.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalysisResponse>, AppError> {
    let upload = extract_upload(&state, multipart).await?;
    let analysis = analyze(&upload.text);
    Ok(Json(build_response(
        upload.file_name,
        Some(upload.kind),
        upload.text,
        analysis,
    )))
}

/// POST /api/v1/analyze/text
pub async fn handle_analyze_text(
    Json(request): Json<AnalyzeTextRequest>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let analysis = analyze(&request.text);
    Ok(Json(build_response(None, None, request.text, analysis)))
}

/// POST /api/v1/spec
///
/// Same input as `/analyze`, but answers with `api_spec.json` as a download.
pub async fn handle_download_spec(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let upload = extract_upload(&state, multipart).await?;
    draft_attachment(&analyze(&upload.text).draft_spec)
}

/// POST /api/v1/spec/text
pub async fn handle_download_spec_text(
    Json(request): Json<AnalyzeTextRequest>,
) -> Result<Response, AppError> {
    draft_attachment(&analyze(&request.text).draft_spec)
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

async fn read_upload(mut multipart: Multipart) -> Result<Upload, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await?;
        return Ok(Upload {
            file_name,
            content_type,
            bytes,
        });
    }
    Err(AppError::Validation(format!(
        "multipart field '{UPLOAD_FIELD}' is required"
    )))
}

async fn extract_upload(state: &AppState, multipart: Multipart) -> Result<ExtractedUpload, AppError> {
    let upload = read_upload(multipart).await?;
    let kind = DocumentKind::detect(upload.content_type.as_deref(), upload.file_name.as_deref())?;
    let size = upload.bytes.len();
    let text = state.extractor.extract(kind, upload.bytes).await?;

    info!(
        file_name = upload.file_name.as_deref().unwrap_or("-"),
        kind = ?kind,
        bytes = size,
        "Upload extracted"
    );

    Ok(ExtractedUpload {
        file_name: upload.file_name,
        kind,
        text,
    })
}

fn build_response(
    file_name: Option<String>,
    document_kind: Option<DocumentKind>,
    extracted_text: String,
    analysis: Analysis,
) -> AnalysisResponse {
    let request_id = Uuid::new_v4();
    info!(
        %request_id,
        keywords = analysis.keywords.len(),
        api_type = analysis.api_type,
        "Analysis complete"
    );

    AnalysisResponse {
        request_id,
        generated_at: Utc::now(),
        file_name,
        document_kind,
        extracted_text,
        primer: API_PRIMER,
        analysis,
    }
}

fn draft_attachment(draft: &DraftSpec) -> Result<Response, AppError> {
    let body = draft.to_pretty_json()?;
    let disposition =
        HeaderValue::from_str(&format!("attachment; filename=\"{DRAFT_SPEC_FILE_NAME}\""))
            .map_err(|e| AppError::Internal(e.into()))?;
    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(DRAFT_SPEC_MIME)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}
