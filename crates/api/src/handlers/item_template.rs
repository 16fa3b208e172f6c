//! Handlers for the `/objetos` item catalog.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pathfinder_core::types::DbId;
use pathfinder_db::models::item_template::{CreateItemTemplate, ItemTemplate};
use pathfinder_db::repositories::ItemTemplateRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

const ENTITY: &str = "ItemTemplate";

/// GET /api/objetos
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ItemTemplate>>> {
    let items = ItemTemplateRepo::list(&state.pool).await?;
    Ok(Json(items))
}

/// POST /api/objetos
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateItemTemplate>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let id = ItemTemplateRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::with_id(id, "Objeto creado")),
    ))
}

/// PUT /api/objetos/{id}
///
/// Full replacement: omitted fields reset to their defaults.
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateItemTemplate>,
) -> AppResult<Json<MessageResponse>> {
    if ItemTemplateRepo::replace(&state.pool, id, &input).await? {
        Ok(Json(MessageResponse::with_id(id, "Objeto actualizado")))
    } else {
        Err(AppError::not_found(ENTITY, id))
    }
}

/// DELETE /api/objetos/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if ItemTemplateRepo::delete(&state.pool, id).await? {
        Ok(Json(MessageResponse::message("Objeto eliminado")))
    } else {
        Err(AppError::not_found(ENTITY, id))
    }
}
