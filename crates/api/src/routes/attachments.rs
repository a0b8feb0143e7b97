//! Top-level upload routes for photos and maps.

use axum::routing::post;
use axum::Router;

use crate::handlers::attachment;
use crate::state::AppState;

/// ```text
/// POST   /photos                            -> attachment::upload_photo
/// POST   /maps                              -> attachment::upload_map
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/photos", post(attachment::upload_photo))
        .route("/maps", post(attachment::upload_map))
}
