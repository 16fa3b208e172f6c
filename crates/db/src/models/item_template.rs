//! Item catalog model and DTO.

use pathfinder_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `objetos_predefinidos` catalog.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct ItemTemplate {
    pub id: DbId,
    pub nombre: String,
    /// `NULL` only on rows written before the column had a default.
    pub tipo: Option<String>,
    pub peso: f64,
    pub valor: i64,
    pub descripcion: Option<String>,
    pub imagen: Option<String>,
}

/// DTO for creating or fully replacing an item template.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateItemTemplate {
    pub nombre: String,
    pub tipo: Option<String>,
    pub peso: Option<f64>,
    pub valor: Option<i64>,
    pub descripcion: Option<String>,
    pub imagen: Option<String>,
}
