//! Character skill model and DTO.

use pathfinder_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `habilidades` table. Owned by one character.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Skill {
    pub id: DbId,
    pub personaje_id: DbId,
    pub nombre: String,
    /// Governing ability score, e.g. `destreza`.
    pub atributo: String,
    pub rango: i64,
    /// Training tier, e.g. `Básico`.
    pub entrenamiento: String,
}

/// DTO for adding a skill to a character.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSkill {
    pub personaje_id: DbId,
    pub nombre: String,
    pub atributo: Option<String>,
    pub rango: Option<i64>,
    pub entrenamiento: Option<String>,
}
