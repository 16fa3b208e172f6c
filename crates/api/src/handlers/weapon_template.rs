//! Handlers for the `/weapons` catalog.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pathfinder_core::types::DbId;
use pathfinder_db::models::weapon_template::{CreateWeaponTemplate, WeaponTemplate};
use pathfinder_db::repositories::WeaponTemplateRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

const ENTITY: &str = "WeaponTemplate";

/// GET /api/weapons
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<WeaponTemplate>>> {
    let weapons = WeaponTemplateRepo::list(&state.pool).await?;
    Ok(Json(weapons))
}

/// POST /api/weapons
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateWeaponTemplate>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let id = WeaponTemplateRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::with_id(id, "Arma creada")),
    ))
}

/// PUT /api/weapons/{id}
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateWeaponTemplate>,
) -> AppResult<Json<MessageResponse>> {
    if WeaponTemplateRepo::replace(&state.pool, id, &input).await? {
        Ok(Json(MessageResponse::with_id(id, "Arma actualizada")))
    } else {
        Err(AppError::not_found(ENTITY, id))
    }
}

/// DELETE /api/weapons/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if WeaponTemplateRepo::delete(&state.pool, id).await? {
        Ok(Json(MessageResponse::message("Arma eliminada")))
    } else {
        Err(AppError::not_found(ENTITY, id))
    }
}
