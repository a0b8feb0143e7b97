//! Handlers for the `/vsp` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use vsp_core::error::CoreError;
use vsp_core::types::DbId;
use vsp_core::validation::validate_input;
use vsp_db::models::vsp::{CreateVsp, Vsp};
use vsp_db::repositories::VspRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Verify that a site exists, returning it or a `NotFound` error.
///
/// Gate for every child create and list: nothing is written when it fails.
pub async fn ensure_vsp_exists(pool: &sqlx::PgPool, vsp_id: DbId) -> AppResult<Vsp> {
    VspRepo::find_by_id(pool, vsp_id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Vsp",
            id: vsp_id,
        })
    })
}

/// POST /vsp
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateVsp>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Vsp>)> {
    let Json(input) = payload?;
    validate_input(&input)?;

    let vsp = VspRepo::create(&state.pool, &input).await?;
    tracing::info!(vsp_id = vsp.id, "Created site");
    Ok((StatusCode::CREATED, Json(vsp)))
}

/// GET /vsp
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Vsp>>> {
    let sites = VspRepo::list(&state.pool).await?;
    Ok(Json(sites))
}

/// GET /vsp/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vsp>> {
    let vsp = ensure_vsp_exists(&state.pool, id).await?;
    Ok(Json(vsp))
}
