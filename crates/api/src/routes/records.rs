//! Top-level create routes for site-owned records (parent in the body).

use axum::routing::post;
use axum::Router;

use crate::handlers::{maintenance_plan, object, repair, work_log};
use crate::state::AppState;

/// ```text
/// POST   /objects                           -> object::create
/// POST   /repairs                           -> repair::create
/// POST   /maintenance_plans                 -> maintenance_plan::create
/// POST   /work_logs                         -> work_log::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/objects", post(object::create))
        .route("/repairs", post(repair::create))
        .route("/maintenance_plans", post(maintenance_plan::create))
        .route("/work_logs", post(work_log::create))
}
