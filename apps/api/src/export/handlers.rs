//! Axum route handlers for the gated actions: preview, print and word export.

use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::export::{open_preview, run_gated, DocumentExporter, ExportedDocument, PrintExporter, WordExporter};
use crate::form::dates::YearMonth;
use crate::render::RenderedDocument;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct OpenPreviewResponse {
    pub document: RenderedDocument,
    pub preview_html: String,
}

fn into_http(doc: ExportedDocument) -> Result<Response, AppError> {
    let mut response = doc.body.into_response();
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(doc.content_type),
    );
    if let Some(name) = doc.file_name {
        let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{name}\""))
            .map_err(|e| AppError::Internal(e.into()))?;
        headers.insert(header::CONTENT_DISPOSITION, disposition);
    }
    Ok(response)
}

async fn export_with(state: &AppState, exporter: &dyn DocumentExporter) -> Result<Response, AppError> {
    let mut form = state.form.lock().await;
    let doc = run_gated(&mut form, exporter, YearMonth::now()).map_err(AppError::IncompleteForm)?;
    into_http(doc)
}

/// GET /api/v1/resume/preview
pub async fn handle_open_preview(
    State(state): State<AppState>,
) -> Result<Json<OpenPreviewResponse>, AppError> {
    let mut form = state.form.lock().await;
    let document = open_preview(&mut form, YearMonth::now()).map_err(AppError::IncompleteForm)?;
    Ok(Json(OpenPreviewResponse {
        preview_html: document.to_html(),
        document,
    }))
}

/// GET /api/v1/resume/print
pub async fn handle_print(State(state): State<AppState>) -> Result<Response, AppError> {
    export_with(&state, &PrintExporter).await
}

/// GET /api/v1/resume/export/word
pub async fn handle_export_word(State(state): State<AppState>) -> Result<Response, AppError> {
    export_with(&state, &WordExporter).await
}
