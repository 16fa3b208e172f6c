//! Handlers for the `/inventario` resource.
//!
//! `GET /inventario/{id}` takes a character id and lists that character's
//! items; `PUT` and `DELETE` on the same path take an inventory row id.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pathfinder_core::types::DbId;
use pathfinder_db::models::inventory::{CreateInventoryItem, InventoryItem, UpdateInventoryItem};
use pathfinder_db::repositories::InventoryRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

const ENTITY: &str = "InventoryItem";

/// GET /api/inventario/{personaje_id}
pub async fn list_by_character(
    State(state): State<AppState>,
    Path(personaje_id): Path<DbId>,
) -> AppResult<Json<Vec<InventoryItem>>> {
    let items = InventoryRepo::list_by_character(&state.pool, personaje_id).await?;
    Ok(Json(items))
}

/// POST /api/inventario
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateInventoryItem>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let id = InventoryRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::with_id(id, "Item agregado al inventario")),
    ))
}

/// PUT /api/inventario/{id}
///
/// Only `cantidad` can change. A body without it leaves the row untouched.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateInventoryItem>,
) -> AppResult<Json<MessageResponse>> {
    if let Some(cantidad) = input.cantidad {
        let updated = InventoryRepo::update_quantity(&state.pool, id, cantidad).await?;
        if !updated {
            return Err(AppError::not_found(ENTITY, id));
        }
    }
    Ok(Json(MessageResponse::with_id(id, "Inventario actualizado")))
}

/// DELETE /api/inventario/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if InventoryRepo::delete(&state.pool, id).await? {
        Ok(Json(MessageResponse::message("Item eliminado del inventario")))
    } else {
        Err(AppError::not_found(ENTITY, id))
    }
}
