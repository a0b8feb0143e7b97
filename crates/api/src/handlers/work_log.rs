//! Handlers for work logs.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use vsp_core::types::DbId;
use vsp_core::validation::{require_parent, validate_input};
use vsp_db::models::work_log::{CreateWorkLog, WorkLog};
use vsp_db::repositories::WorkLogRepo;

use crate::error::AppResult;
use crate::handlers::vsp::ensure_vsp_exists;
use crate::state::AppState;

/// POST /work_logs
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateWorkLog>, JsonRejection>,
) -> AppResult<(StatusCode, Json<WorkLog>)> {
    let Json(input) = payload?;
    insert(&state, input).await
}

/// POST /vsp/{id}/work_logs
pub async fn create_for_vsp(
    State(state): State<AppState>,
    Path(vsp_id): Path<DbId>,
    payload: Result<Json<CreateWorkLog>, JsonRejection>,
) -> AppResult<(StatusCode, Json<WorkLog>)> {
    let Json(mut input) = payload?;
    input.vsp_id = Some(vsp_id);
    insert(&state, input).await
}

/// GET /vsp/{id}/work_logs
pub async fn list_by_vsp(
    State(state): State<AppState>,
    Path(vsp_id): Path<DbId>,
) -> AppResult<Json<Vec<WorkLog>>> {
    ensure_vsp_exists(&state.pool, vsp_id).await?;
    let items = WorkLogRepo::list_by_vsp(&state.pool, vsp_id).await?;
    Ok(Json(items))
}

async fn insert(state: &AppState, input: CreateWorkLog) -> AppResult<(StatusCode, Json<WorkLog>)> {
    validate_input(&input)?;
    let vsp_id = require_parent(input.vsp_id)?;
    ensure_vsp_exists(&state.pool, vsp_id).await?;

    let log = WorkLogRepo::create(&state.pool, vsp_id, &input).await?;
    Ok((StatusCode::CREATED, Json(log)))
}
