pub mod attachments;
pub mod health;
pub mod records;
pub mod vsp;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /vsp                                       list, create
/// /vsp/{id}                                  get
/// /vsp/{id}/objects                          list, create
/// /vsp/{id}/repairs                          list, create
/// /vsp/{id}/maintenance_plans                list, create
/// /vsp/{id}/work_logs                        list, create
/// /vsp/{id}/photos                           list, upload (multipart)
/// /vsp/{id}/maps                             list, upload (multipart)
///
/// /objects                                   create (vsp_id in body)
/// /repairs                                   create (vsp_id in body)
/// /maintenance_plans                         create (vsp_id in body)
/// /work_logs                                 create (vsp_id in body)
/// /photos                                    upload (optional vsp_id part)
/// /maps                                      upload (optional vsp_id part)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/vsp", vsp::router())
        .merge(records::router())
        .merge(attachments::router())
}
