//! Route definitions for the ownerless template catalogs.

use axum::routing::{delete, get, put};
use axum::Router;

use crate::handlers::{armor_template, item_template, skill_template, weapon_template};
use crate::state::AppState;

/// Routes mounted at `/objetos`.
pub fn item_router() -> Router<AppState> {
    Router::new()
        .route("/", get(item_template::list).post(item_template::create))
        .route(
            "/{id}",
            put(item_template::replace).delete(item_template::delete),
        )
}

/// Routes mounted at `/armor`.
pub fn armor_router() -> Router<AppState> {
    Router::new()
        .route("/", get(armor_template::list).post(armor_template::create))
        .route(
            "/{id}",
            put(armor_template::replace).delete(armor_template::delete),
        )
}

/// Routes mounted at `/weapons`.
pub fn weapon_router() -> Router<AppState> {
    Router::new()
        .route("/", get(weapon_template::list).post(weapon_template::create))
        .route(
            "/{id}",
            put(weapon_template::replace).delete(weapon_template::delete),
        )
}

/// Routes mounted at `/habilidades-lib`. The skill library has no update.
pub fn skill_router() -> Router<AppState> {
    Router::new()
        .route("/", get(skill_template::list).post(skill_template::create))
        .route("/{id}", delete(skill_template::delete))
}
