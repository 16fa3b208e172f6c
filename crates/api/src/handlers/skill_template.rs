//! Handlers for the `/habilidades-lib` skill catalog. No update endpoint.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pathfinder_core::types::DbId;
use pathfinder_db::models::skill_template::{CreateSkillTemplate, SkillTemplate};
use pathfinder_db::repositories::SkillTemplateRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/habilidades-lib
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<SkillTemplate>>> {
    let skills = SkillTemplateRepo::list(&state.pool).await?;
    Ok(Json(skills))
}

/// POST /api/habilidades-lib
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSkillTemplate>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let id = SkillTemplateRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::with_id(id, "Habilidad creada")),
    ))
}

/// DELETE /api/habilidades-lib/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if SkillTemplateRepo::delete(&state.pool, id).await? {
        Ok(Json(MessageResponse::message("Habilidad eliminada")))
    } else {
        Err(AppError::not_found("SkillTemplate", id))
    }
}
