//! Armor catalog model and DTO.

use pathfinder_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `armaduras_predefinidas` catalog.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct ArmorTemplate {
    pub id: DbId,
    pub nombre: String,
    /// `Ligera`, `Media`, `Pesada` or `Escudo`. Free text, not checked.
    pub tipo: String,
    pub bonificador_ca: i64,
    /// Maximum Dexterity bonus allowed while worn. `None` means no cap.
    pub max_destreza: Option<i64>,
    pub penalizador: i64,
    /// Arcane spell failure chance, in percent.
    pub fallo_conjuro: i64,
    pub peso: f64,
    pub valor: i64,
    pub descripcion: Option<String>,
    pub imagen: Option<String>,
}

/// DTO for creating or fully replacing an armor template.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateArmorTemplate {
    pub nombre: String,
    pub tipo: Option<String>,
    pub bonificador_ca: Option<i64>,
    pub max_destreza: Option<i64>,
    pub penalizador: Option<i64>,
    pub fallo_conjuro: Option<i64>,
    pub peso: Option<f64>,
    pub valor: Option<i64>,
    pub descripcion: Option<String>,
    pub imagen: Option<String>,
}
