//! Weapon catalog model and DTO.

use pathfinder_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `armas_predefinidas` catalog.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct WeaponTemplate {
    pub id: DbId,
    pub nombre: String,
    pub tipo: String,
    /// Damage dice notation, e.g. `1d8` or `2d4`.
    pub dano: String,
    /// Natural roll range that threatens a critical, e.g. `19-20`.
    pub critico_rango: String,
    pub critico_multiplicador: i64,
    /// Damage type: `Contundente`, `Cortante`, `Perforante`.
    pub tipo_dano: String,
    /// Range increment in feet; 0 for melee weapons.
    pub alcance: i64,
    pub peso: f64,
    pub valor: i64,
    pub descripcion: Option<String>,
    pub imagen: Option<String>,
}

/// DTO for creating or fully replacing a weapon template.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateWeaponTemplate {
    pub nombre: String,
    pub tipo: Option<String>,
    pub dano: Option<String>,
    pub critico_rango: Option<String>,
    pub critico_multiplicador: Option<i64>,
    pub tipo_dano: Option<String>,
    pub alcance: Option<i64>,
    pub peso: Option<f64>,
    pub valor: Option<i64>,
    pub descripcion: Option<String>,
    pub imagen: Option<String>,
}
