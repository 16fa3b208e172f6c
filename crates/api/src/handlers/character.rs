//! Handlers for the `/personajes` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pathfinder_core::types::DbId;
use pathfinder_db::models::character::{Character, CreateCharacter, UpdateCharacter};
use pathfinder_db::repositories::CharacterRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

const ENTITY: &str = "Character";

/// GET /api/personajes
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Character>>> {
    let characters = CharacterRepo::list(&state.pool).await?;
    Ok(Json(characters))
}

/// GET /api/personajes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Character>> {
    let character = CharacterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(character))
}

/// POST /api/personajes
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCharacter>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let id = CharacterRepo::create(&state.pool, &input).await?;
    tracing::info!(personaje_id = id, nombre = %input.nombre, "Character created");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::with_id(id, "Personaje creado")),
    ))
}

/// PUT /api/personajes/{id}
///
/// Partial update: only the fields present in the body are changed.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCharacter>,
) -> AppResult<Json<MessageResponse>> {
    CharacterRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(MessageResponse::with_id(id, "Personaje actualizado")))
}

/// DELETE /api/personajes/{id}
///
/// Removes the character with its inventory and skills. Deleting an id that
/// does not exist still succeeds.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let existed = CharacterRepo::delete(&state.pool, id).await?;
    if !existed {
        tracing::debug!(personaje_id = id, "Delete of unknown character");
    }
    Ok(Json(MessageResponse::message("Personaje eliminado")))
}
