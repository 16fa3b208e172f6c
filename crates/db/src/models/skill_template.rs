//! Skill catalog model and DTO.

use pathfinder_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `habilidades_predefinidas` catalog.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct SkillTemplate {
    pub id: DbId,
    pub nombre: String,
    /// Class the skill is tied to, if any.
    pub clase: Option<String>,
    pub nivel_minimo: i64,
    pub entrenamiento: String,
    pub atributo: String,
}

/// DTO for adding a skill to the library. Only `nombre` is required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateSkillTemplate {
    pub nombre: String,
    pub clase: Option<String>,
    pub nivel_minimo: Option<i64>,
    pub entrenamiento: Option<String>,
    pub atributo: Option<String>,
}
