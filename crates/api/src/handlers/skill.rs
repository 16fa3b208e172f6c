//! Handlers for the `/habilidades` resource.
//!
//! As with inventory, `GET /habilidades/{id}` lists by character id while
//! `DELETE` takes the skill row id.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pathfinder_core::types::DbId;
use pathfinder_db::models::skill::{CreateSkill, Skill};
use pathfinder_db::repositories::SkillRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/habilidades/{personaje_id}
pub async fn list_by_character(
    State(state): State<AppState>,
    Path(personaje_id): Path<DbId>,
) -> AppResult<Json<Vec<Skill>>> {
    let skills = SkillRepo::list_by_character(&state.pool, personaje_id).await?;
    Ok(Json(skills))
}

/// POST /api/habilidades
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSkill>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let id = SkillRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::with_id(id, "Habilidad agregada")),
    ))
}

/// DELETE /api/habilidades/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if SkillRepo::delete(&state.pool, id).await? {
        Ok(Json(MessageResponse::message("Habilidad eliminada")))
    } else {
        Err(AppError::not_found("Skill", id))
    }
}
