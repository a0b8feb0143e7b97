//! Handlers for site objects.
//!
//! Created either at `POST /objects` (parent in the body) or at
//! `POST /vsp/{id}/objects` (parent in the path, overriding the body).

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use vsp_core::types::DbId;
use vsp_core::validation::{require_parent, validate_input};
use vsp_db::models::object::{CreateSiteObject, SiteObject};
use vsp_db::repositories::ObjectRepo;

use crate::error::AppResult;
use crate::handlers::vsp::ensure_vsp_exists;
use crate::state::AppState;

/// POST /objects
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateSiteObject>, JsonRejection>,
) -> AppResult<(StatusCode, Json<SiteObject>)> {
    let Json(input) = payload?;
    insert(&state, input).await
}

/// POST /vsp/{id}/objects
pub async fn create_for_vsp(
    State(state): State<AppState>,
    Path(vsp_id): Path<DbId>,
    payload: Result<Json<CreateSiteObject>, JsonRejection>,
) -> AppResult<(StatusCode, Json<SiteObject>)> {
    let Json(mut input) = payload?;
    input.vsp_id = Some(vsp_id);
    insert(&state, input).await
}

/// GET /vsp/{id}/objects
pub async fn list_by_vsp(
    State(state): State<AppState>,
    Path(vsp_id): Path<DbId>,
) -> AppResult<Json<Vec<SiteObject>>> {
    ensure_vsp_exists(&state.pool, vsp_id).await?;
    let objects = ObjectRepo::list_by_vsp(&state.pool, vsp_id).await?;
    Ok(Json(objects))
}

async fn insert(
    state: &AppState,
    input: CreateSiteObject,
) -> AppResult<(StatusCode, Json<SiteObject>)> {
    validate_input(&input)?;
    let vsp_id = require_parent(input.vsp_id)?;
    ensure_vsp_exists(&state.pool, vsp_id).await?;

    let object = ObjectRepo::create(&state.pool, vsp_id, &input).await?;
    Ok((StatusCode::CREATED, Json(object)))
}
