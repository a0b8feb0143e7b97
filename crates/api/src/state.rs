use std::sync::Arc;

use crate::uploads::AttachmentStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Built once at startup; cheaply cloneable (inner data is behind `Arc` or is
/// already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: vsp_db::DbPool,
    /// Filesystem store for uploaded photo and map files.
    pub attachments: Arc<AttachmentStore>,
}
