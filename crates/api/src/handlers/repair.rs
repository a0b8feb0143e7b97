//! Handlers for repairs.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use vsp_core::types::DbId;
use vsp_core::validation::{require_parent, validate_input};
use vsp_db::models::repair::{CreateRepair, Repair};
use vsp_db::repositories::RepairRepo;

use crate::error::AppResult;
use crate::handlers::vsp::ensure_vsp_exists;
use crate::state::AppState;

/// POST /repairs
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateRepair>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Repair>)> {
    let Json(input) = payload?;
    insert(&state, input).await
}

/// POST /vsp/{id}/repairs
pub async fn create_for_vsp(
    State(state): State<AppState>,
    Path(vsp_id): Path<DbId>,
    payload: Result<Json<CreateRepair>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Repair>)> {
    let Json(mut input) = payload?;
    input.vsp_id = Some(vsp_id);
    insert(&state, input).await
}

/// GET /vsp/{id}/repairs
pub async fn list_by_vsp(
    State(state): State<AppState>,
    Path(vsp_id): Path<DbId>,
) -> AppResult<Json<Vec<Repair>>> {
    ensure_vsp_exists(&state.pool, vsp_id).await?;
    let items = RepairRepo::list_by_vsp(&state.pool, vsp_id).await?;
    Ok(Json(items))
}

async fn insert(state: &AppState, input: CreateRepair) -> AppResult<(StatusCode, Json<Repair>)> {
    validate_input(&input)?;
    let vsp_id = require_parent(input.vsp_id)?;
    ensure_vsp_exists(&state.pool, vsp_id).await?;

    let repair = RepairRepo::create(&state.pool, vsp_id, &input).await?;
    Ok((StatusCode::CREATED, Json(repair)))
}
