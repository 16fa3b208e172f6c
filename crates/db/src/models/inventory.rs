//! Inventory item model and DTOs.

use pathfinder_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `inventario` table. Owned by one character.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct InventoryItem {
    pub id: DbId,
    pub personaje_id: DbId,
    pub item: String,
    pub cantidad: i64,
    pub peso: f64,
    pub descripcion: Option<String>,
    pub valor: i64,
    pub imagen: Option<String>,
}

/// DTO for adding an item to a character's inventory.
///
/// Values are usually copied from an [`ItemTemplate`](super::item_template::ItemTemplate)
/// by the client; the row keeps no link back to the template.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInventoryItem {
    pub personaje_id: DbId,
    pub item: String,
    pub cantidad: Option<i64>,
    pub peso: Option<f64>,
    pub descripcion: Option<String>,
    pub valor: Option<i64>,
    pub imagen: Option<String>,
}

/// DTO for updating an inventory row. Only the quantity can change.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateInventoryItem {
    pub cantidad: Option<i64>,
}
