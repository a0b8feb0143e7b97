//! Handlers for photo and map uploads.
//!
//! Uploads are `multipart/form-data` with a `file` part and an optional
//! `vsp_id` (or `site_id`) text part. A metadata record is created with the
//! original filename as its description, and the file lands at
//! `{photos|maps}/{filename}` once that record exists.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use vsp_core::attachment::{relative_path, sanitize_filename, AttachmentKind};
use vsp_core::error::CoreError;
use vsp_core::types::DbId;
use vsp_core::validation::validate_input;
use vsp_db::models::attachment::{Attachment, CreateAttachment};
use vsp_db::repositories::AttachmentRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::vsp::ensure_vsp_exists;
use crate::state::AppState;

/// The parts of an upload request this service understands.
struct UploadForm {
    filename: String,
    bytes: Vec<u8>,
    vsp_id: Option<DbId>,
}

/// POST /photos
pub async fn upload_photo(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<Attachment>)> {
    upload(&state, AttachmentKind::Photo, None, multipart).await
}

/// POST /vsp/{id}/photos
pub async fn upload_photo_for_vsp(
    State(state): State<AppState>,
    Path(vsp_id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<Attachment>)> {
    upload(&state, AttachmentKind::Photo, Some(vsp_id), multipart).await
}

/// GET /vsp/{id}/photos
pub async fn list_photos(
    State(state): State<AppState>,
    Path(vsp_id): Path<DbId>,
) -> AppResult<Json<Vec<Attachment>>> {
    list(&state, AttachmentKind::Photo, vsp_id).await
}

/// POST /maps
pub async fn upload_map(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<Attachment>)> {
    upload(&state, AttachmentKind::Map, None, multipart).await
}

/// POST /vsp/{id}/maps
pub async fn upload_map_for_vsp(
    State(state): State<AppState>,
    Path(vsp_id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<Attachment>)> {
    upload(&state, AttachmentKind::Map, Some(vsp_id), multipart).await
}

/// GET /vsp/{id}/maps
pub async fn list_maps(
    State(state): State<AppState>,
    Path(vsp_id): Path<DbId>,
) -> AppResult<Json<Vec<Attachment>>> {
    list(&state, AttachmentKind::Map, vsp_id).await
}

// ---------------------------------------------------------------------------
// Shared implementation
// ---------------------------------------------------------------------------

/// Validate, stage the file, record its metadata, then publish the file.
///
/// A path parent overrides any `vsp_id` form field. The live path is only
/// replaced after the record is committed; any earlier failure drops the
/// staged bytes and leaves existing files untouched.
async fn upload(
    state: &AppState,
    kind: AttachmentKind,
    path_vsp_id: Option<DbId>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<Attachment>)> {
    let form = read_form(multipart).await?;
    let filename = sanitize_filename(&form.filename)?;
    let vsp_id = path_vsp_id.or(form.vsp_id);

    if let Some(id) = vsp_id {
        ensure_vsp_exists(&state.pool, id).await?;
    }

    let input = CreateAttachment {
        vsp_id,
        description: form.filename,
        file_path: relative_path(kind, &filename),
    };
    validate_input(&input)?;

    let staged = state.attachments.stage(kind, &filename, &form.bytes).await?;
    let attachment = AttachmentRepo::create(&state.pool, kind, &input).await?;
    staged.commit().await?;
    tracing::info!(
        kind = kind.namespace(),
        id = attachment.id,
        vsp_id = ?attachment.vsp_id,
        "Created attachment record"
    );
    Ok((StatusCode::CREATED, Json(attachment)))
}

async fn list(
    state: &AppState,
    kind: AttachmentKind,
    vsp_id: DbId,
) -> AppResult<Json<Vec<Attachment>>> {
    ensure_vsp_exists(&state.pool, vsp_id).await?;
    let items = AttachmentRepo::list_by_vsp(&state.pool, kind, vsp_id).await?;
    Ok(Json(items))
}

/// Drain the multipart stream into an [`UploadForm`], ignoring unknown parts.
async fn read_form(mut multipart: Multipart) -> AppResult<UploadForm> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut vsp_id: Option<DbId> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let filename = field
                    .file_name()
                    .map(str::to_string)
                    .ok_or_else(|| AppError::BadRequest("The 'file' part has no filename".into()))?;
                let data = field.bytes().await?;
                file = Some((filename, data.to_vec()));
            }
            "vsp_id" | "site_id" => {
                let text = field.text().await?;
                vsp_id = parse_vsp_id(&text)?;
            }
            _ => {} // ignore unknown fields
        }
    }

    let (filename, bytes) =
        file.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;

    Ok(UploadForm {
        filename,
        bytes,
        vsp_id,
    })
}

/// An empty or `null` value means "no parent".
fn parse_vsp_id(text: &str) -> Result<Option<DbId>, CoreError> {
    let text = text.trim();
    if text.is_empty() || text.eq_ignore_ascii_case("null") {
        return Ok(None);
    }
    text.parse::<DbId>().map(Some).map_err(|_| {
        CoreError::Validation(format!("vsp_id must be an integer, got '{text}'"))
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parse_vsp_id_accepts_integers() {
        assert_eq!(parse_vsp_id("12").unwrap(), Some(12));
        assert_eq!(parse_vsp_id(" 3 ").unwrap(), Some(3));
    }

    #[test]
    fn parse_vsp_id_treats_blank_and_null_as_absent() {
        assert_eq!(parse_vsp_id("").unwrap(), None);
        assert_eq!(parse_vsp_id("null").unwrap(), None);
    }

    #[test]
    fn parse_vsp_id_rejects_garbage() {
        assert_matches!(parse_vsp_id("abc"), Err(CoreError::Validation(_)));
    }
}
