pub mod catalog;
pub mod character;
pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{inventory, skill};
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                          fixed status payload
///
/// /personajes                      list, create
/// /personajes/{id}                 get, partial update, cascading delete
///
/// /inventario                      add item (POST)
/// /inventario/{id}                 list by character id (GET),
///                                  set quantity (PUT), delete item (DELETE)
///
/// /habilidades                     add skill (POST)
/// /habilidades/{id}                list by character id (GET), delete skill (DELETE)
///
/// /objetos                         list, create
/// /objetos/{id}                    replace, delete
/// /armor                           list, create
/// /armor/{id}                      replace, delete
/// /weapons                         list, create
/// /weapons/{id}                    replace, delete
/// /habilidades-lib                 list, create
/// /habilidades-lib/{id}            delete
/// ```
///
/// The router cannot hold two parameter names at one path position, so the
/// owner-scoped GET shares `/{id}` with the row-scoped PUT and DELETE.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/personajes", character::router())
        .route("/inventario", post(inventory::create))
        .route(
            "/inventario/{id}",
            get(inventory::list_by_character)
                .put(inventory::update)
                .delete(inventory::delete),
        )
        .route("/habilidades", post(skill::create))
        .route(
            "/habilidades/{id}",
            get(skill::list_by_character).delete(skill::delete),
        )
        .nest("/objetos", catalog::item_router())
        .nest("/armor", catalog::armor_router())
        .nest("/weapons", catalog::weapon_router())
        .nest("/habilidades-lib", catalog::skill_router())
}
