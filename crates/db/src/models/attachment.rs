//! Photo and map attachment metadata.
//!
//! Photos and maps share one shape and live in separate tables
//! (`photos`, `maps`), selected by [`AttachmentKind`].

use serde::Serialize;
use sqlx::FromRow;
use validator::Validate;
use vsp_core::types::DbId;

pub use vsp_core::attachment::AttachmentKind;

/// A row from the `photos` or `maps` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Attachment {
    pub id: DbId,
    pub vsp_id: Option<DbId>,
    /// Original filename as uploaded.
    pub description: String,
    /// Storage path relative to the upload root, e.g. `photos/lobby.jpg`.
    pub file_path: String,
}

/// Metadata for a new attachment, built by the upload handler after the
/// file has been written.
#[derive(Debug, Clone, Validate)]
pub struct CreateAttachment {
    pub vsp_id: Option<DbId>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub description: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub file_path: String,
}
