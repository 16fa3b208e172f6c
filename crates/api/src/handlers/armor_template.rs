//! Handlers for the `/armor` catalog.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pathfinder_core::types::DbId;
use pathfinder_db::models::armor_template::{ArmorTemplate, CreateArmorTemplate};
use pathfinder_db::repositories::ArmorTemplateRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

const ENTITY: &str = "ArmorTemplate";

/// GET /api/armor
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ArmorTemplate>>> {
    let armor = ArmorTemplateRepo::list(&state.pool).await?;
    Ok(Json(armor))
}

/// POST /api/armor
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateArmorTemplate>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let id = ArmorTemplateRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::with_id(id, "Armadura creada")),
    ))
}

/// PUT /api/armor/{id}
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateArmorTemplate>,
) -> AppResult<Json<MessageResponse>> {
    if ArmorTemplateRepo::replace(&state.pool, id, &input).await? {
        Ok(Json(MessageResponse::with_id(id, "Armadura actualizada")))
    } else {
        Err(AppError::not_found(ENTITY, id))
    }
}

/// DELETE /api/armor/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if ArmorTemplateRepo::delete(&state.pool, id).await? {
        Ok(Json(MessageResponse::message("Armadura eliminada")))
    } else {
        Err(AppError::not_found(ENTITY, id))
    }
}
