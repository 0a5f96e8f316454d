//! Axum route handlers for editing the form.
//!
//! Every mutation takes the form lock, applies the change, and answers with a
//! full re-render of both the document and the editor panel.

use axum::{
    extract::{multipart::MultipartError, Multipart, Path, State},
    http::StatusCode,
    Json,
};
use bytes::BytesMut;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::form::dates::YearMonth;
use crate::form::entries::EntryKind;
use crate::form::fields::FieldId;
use crate::form::photo::{image_content_type, Photo, PhotoError};
use crate::form::section_order::{SectionControl, SectionId};
use crate::form::tags::TagKind;
use crate::form::validation::ValidationReport;
use crate::form::FormState;
use crate::render::editor::{render_editor, EditorView};
use crate::render::{render_document, RenderedDocument};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ValueRequest {
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct CurrentRequest {
    pub current: bool,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveDirection {
    Up,
    Down,
}

#[derive(Debug, Deserialize)]
pub struct MoveSectionRequest {
    pub section: SectionId,
    pub direction: MoveDirection,
}

#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub dragged: SectionId,
    pub target: SectionId,
}

/// The state of the whole page after a change.
#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub form: FormState,
    pub document: RenderedDocument,
    pub preview_html: String,
    pub editor: EditorView,
}

#[derive(Debug, Serialize)]
pub struct MutationResponse {
    /// Whether the request changed anything (duplicate tags, boundary moves and
    /// missing entries are accepted but leave the form as it was).
    pub changed: bool,
    #[serde(flatten)]
    pub preview: PreviewResponse,
}

#[derive(Debug, Serialize)]
pub struct AddEntryResponse {
    pub id: u32,
    #[serde(flatten)]
    pub preview: PreviewResponse,
}

pub fn snapshot(form: &FormState) -> PreviewResponse {
    let now = YearMonth::now();
    let document = render_document(form, now);
    PreviewResponse {
        form: form.clone(),
        preview_html: document.to_html(),
        document,
        editor: render_editor(form, now),
    }
}

fn mutation(changed: bool, form: &FormState) -> Json<MutationResponse> {
    Json(MutationResponse {
        changed,
        preview: snapshot(form),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/resume
pub async fn handle_get_resume(State(state): State<AppState>) -> Json<PreviewResponse> {
    let form = state.form.lock().await;
    Json(snapshot(&form))
}

/// POST /api/v1/resume/reset
pub async fn handle_reset(State(state): State<AppState>) -> Json<PreviewResponse> {
    let mut form = state.form.lock().await;
    *form = FormState::new();
    info!("Form reset");
    Json(snapshot(&form))
}

/// PUT /api/v1/resume/fields/:field
pub async fn handle_set_field(
    State(state): State<AppState>,
    Path(field): Path<FieldId>,
    Json(req): Json<ValueRequest>,
) -> Json<MutationResponse> {
    let mut form = state.form.lock().await;
    form.set_field(field, req.value);
    mutation(true, &form)
}

/// POST /api/v1/resume/tags/:kind
pub async fn handle_add_tag(
    State(state): State<AppState>,
    Path(kind): Path<TagKind>,
    Json(req): Json<ValueRequest>,
) -> Json<MutationResponse> {
    let mut form = state.form.lock().await;
    let added = form.add_tag(kind, &req.value);
    mutation(added, &form)
}

/// DELETE /api/v1/resume/tags/:kind/:index
pub async fn handle_remove_tag(
    State(state): State<AppState>,
    Path((kind, index)): Path<(TagKind, usize)>,
) -> Json<MutationResponse> {
    let mut form = state.form.lock().await;
    let removed = form.remove_tag(kind, index).is_some();
    mutation(removed, &form)
}

/// POST /api/v1/resume/entries/:kind
pub async fn handle_add_entry(
    State(state): State<AppState>,
    Path(kind): Path<EntryKind>,
) -> Json<AddEntryResponse> {
    let mut form = state.form.lock().await;
    let id = form.add_entry(kind);
    Json(AddEntryResponse {
        id,
        preview: snapshot(&form),
    })
}

/// DELETE /api/v1/resume/entries/:kind/:id
pub async fn handle_remove_entry(
    State(state): State<AppState>,
    Path((kind, id)): Path<(EntryKind, u32)>,
) -> Json<MutationResponse> {
    let mut form = state.form.lock().await;
    let removed = form.remove_entry(kind, id);
    mutation(removed, &form)
}

/// PUT /api/v1/resume/entries/:kind/:id/fields/:field
pub async fn handle_set_entry_field(
    State(state): State<AppState>,
    Path((kind, id, field)): Path<(EntryKind, u32, String)>,
    Json(req): Json<ValueRequest>,
) -> Result<Json<MutationResponse>, AppError> {
    let mut form = state.form.lock().await;
    form.set_entry_field(kind, id, &field, req.value)?;
    Ok(mutation(true, &form))
}

/// PUT /api/v1/resume/experience/:id/current
pub async fn handle_set_current(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Json(req): Json<CurrentRequest>,
) -> Result<Json<MutationResponse>, AppError> {
    let mut form = state.form.lock().await;
    form.set_experience_current(id, req.current)?;
    Ok(mutation(true, &form))
}

/// GET /api/v1/resume/section-order
pub async fn handle_get_section_order(State(state): State<AppState>) -> Json<Vec<SectionControl>> {
    let form = state.form.lock().await;
    Json(form.section_order.controls())
}

/// POST /api/v1/resume/section-order/move
pub async fn handle_move_section(
    State(state): State<AppState>,
    Json(req): Json<MoveSectionRequest>,
) -> Json<MutationResponse> {
    let mut form = state.form.lock().await;
    let moved = match req.direction {
        MoveDirection::Up => form.section_order.move_up(req.section),
        MoveDirection::Down => form.section_order.move_down(req.section),
    };
    mutation(moved, &form)
}

/// POST /api/v1/resume/section-order/reorder
pub async fn handle_reorder_sections(
    State(state): State<AppState>,
    Json(req): Json<ReorderRequest>,
) -> Json<MutationResponse> {
    let mut form = state.form.lock().await;
    let moved = form.section_order.reorder(req.dragged, req.target);
    mutation(moved, &form)
}

/// POST /api/v1/resume/photo
///
/// The declared type is checked before any bytes are read, and the size is
/// enforced chunk by chunk. The upload is read in full before the form lock is
/// taken; whichever of two overlapping uploads commits last is the photo that stays.
pub async fn handle_upload_photo(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<MutationResponse>, AppError> {
    let limit = state.config.max_photo_bytes;
    let mut field = multipart
        .next_field()
        .await
        .map_err(|e| upload_error(e, 0, limit))?
        .ok_or_else(|| AppError::Validation("No file uploaded".to_string()))?;
    let content_type = image_content_type(field.content_type().unwrap_or_default())?;

    let mut bytes = BytesMut::new();
    while let Some(chunk) = field
        .chunk()
        .await
        .map_err(|e| upload_error(e, bytes.len(), limit))?
    {
        let size = bytes.len() + chunk.len();
        if size > limit {
            return Err(PhotoError::TooLarge { size, limit }.into());
        }
        bytes.extend_from_slice(&chunk);
    }

    let photo = Photo::from_upload(&content_type, &bytes, limit)?;

    let mut form = state.form.lock().await;
    form.set_photo(photo);
    info!("Photo committed ({content_type}, {} bytes)", bytes.len());
    Ok(mutation(true, &form))
}

/// A body that hits a length limit while streaming is reported as an oversized
/// photo; any other multipart failure is a malformed request.
fn upload_error(err: MultipartError, read: usize, limit: usize) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        PhotoError::TooLarge {
            size: read.max(limit + 1),
            limit,
        }
        .into()
    } else {
        AppError::Validation(err.body_text())
    }
}

/// DELETE /api/v1/resume/photo
pub async fn handle_remove_photo(State(state): State<AppState>) -> Json<MutationResponse> {
    let mut form = state.form.lock().await;
    let removed = form.remove_photo();
    mutation(removed, &form)
}

/// POST /api/v1/resume/validate
pub async fn handle_validate(State(state): State<AppState>) -> Json<ValidationReport> {
    let mut form = state.form.lock().await;
    Json(form.validate_all())
}
