//! Route definitions for the `/vsp` resource and its per-site collections.

use axum::routing::get;
use axum::Router;

use crate::handlers::{attachment, maintenance_plan, object, repair, vsp, work_log};
use crate::state::AppState;

/// Routes mounted at `/vsp`.
///
/// ```text
/// GET    /                                  -> list
/// POST   /                                  -> create
/// GET    /{id}                              -> get_by_id
///
/// GET    /{id}/objects                      -> object::list_by_vsp
/// POST   /{id}/objects                      -> object::create_for_vsp
/// GET    /{id}/repairs                      -> repair::list_by_vsp
/// POST   /{id}/repairs                      -> repair::create_for_vsp
/// GET    /{id}/maintenance_plans            -> maintenance_plan::list_by_vsp
/// POST   /{id}/maintenance_plans            -> maintenance_plan::create_for_vsp
/// GET    /{id}/work_logs                    -> work_log::list_by_vsp
/// POST   /{id}/work_logs                    -> work_log::create_for_vsp
/// GET    /{id}/photos                       -> attachment::list_photos
/// POST   /{id}/photos                       -> attachment::upload_photo_for_vsp
/// GET    /{id}/maps                         -> attachment::list_maps
/// POST   /{id}/maps                         -> attachment::upload_map_for_vsp
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(vsp::list).post(vsp::create))
        .route("/{id}", get(vsp::get_by_id))
        .route(
            "/{id}/objects",
            get(object::list_by_vsp).post(object::create_for_vsp),
        )
        .route(
            "/{id}/repairs",
            get(repair::list_by_vsp).post(repair::create_for_vsp),
        )
        .route(
            "/{id}/maintenance_plans",
            get(maintenance_plan::list_by_vsp).post(maintenance_plan::create_for_vsp),
        )
        .route(
            "/{id}/work_logs",
            get(work_log::list_by_vsp).post(work_log::create_for_vsp),
        )
        .route(
            "/{id}/photos",
            get(attachment::list_photos).post(attachment::upload_photo_for_vsp),
        )
        .route(
            "/{id}/maps",
            get(attachment::list_maps).post(attachment::upload_map_for_vsp),
        )
}
