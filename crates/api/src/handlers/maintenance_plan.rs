//! Handlers for maintenance plans.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use vsp_core::types::DbId;
use vsp_core::validation::{require_parent, validate_input};
use vsp_db::models::maintenance_plan::{CreateMaintenancePlan, MaintenancePlan};
use vsp_db::repositories::MaintenancePlanRepo;

use crate::error::AppResult;
use crate::handlers::vsp::ensure_vsp_exists;
use crate::state::AppState;

/// POST /maintenance_plans
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateMaintenancePlan>, JsonRejection>,
) -> AppResult<(StatusCode, Json<MaintenancePlan>)> {
    let Json(input) = payload?;
    insert(&state, input).await
}

/// POST /vsp/{id}/maintenance_plans
pub async fn create_for_vsp(
    State(state): State<AppState>,
    Path(vsp_id): Path<DbId>,
    payload: Result<Json<CreateMaintenancePlan>, JsonRejection>,
) -> AppResult<(StatusCode, Json<MaintenancePlan>)> {
    let Json(mut input) = payload?;
    input.vsp_id = Some(vsp_id);
    insert(&state, input).await
}

/// GET /vsp/{id}/maintenance_plans
pub async fn list_by_vsp(
    State(state): State<AppState>,
    Path(vsp_id): Path<DbId>,
) -> AppResult<Json<Vec<MaintenancePlan>>> {
    ensure_vsp_exists(&state.pool, vsp_id).await?;
    let items = MaintenancePlanRepo::list_by_vsp(&state.pool, vsp_id).await?;
    Ok(Json(items))
}

async fn insert(state: &AppState, input: CreateMaintenancePlan) -> AppResult<(StatusCode, Json<MaintenancePlan>)> {
    validate_input(&input)?;
    let vsp_id = require_parent(input.vsp_id)?;
    ensure_vsp_exists(&state.pool, vsp_id).await?;

    let plan = MaintenancePlanRepo::create(&state.pool, vsp_id, &input).await?;
    Ok((StatusCode::CREATED, Json(plan)))
}
