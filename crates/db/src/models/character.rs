//! Character sheet model and DTOs.

use pathfinder_core::types::DbId;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

/// A row from the `personajes` table.
///
/// The four equipment slots hold `inventario.id` values. They are not
/// foreign keys: nothing checks that the item exists or belongs to this
/// character, and deleting the item leaves the slot pointing at nothing.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Character {
    pub id: DbId,
    pub nombre: String,
    /// `NULL` only on rows written before the column had a default.
    pub clase: Option<String>,
    pub raza: Option<String>,
    pub nivel: i64,
    pub hp_max: i64,
    pub hp_actual: i64,
    pub oro: i64,
    pub fuerza: i64,
    pub destreza: i64,
    pub constitucion: i64,
    pub inteligencia: i64,
    pub sabiduria: i64,
    pub carisma: i64,
    pub notas: String,
    pub escudo_id: Option<DbId>,
    pub armadura_id: Option<DbId>,
    pub mano_derecha_id: Option<DbId>,
    pub mano_izquierda_id: Option<DbId>,
}

/// DTO for creating a character. Only `nombre` is required.
///
/// Omitted fields take the column defaults: class `Guerrero`, race `Humano`,
/// level 1, 10/10 hit points, 0 gold, 10 in every ability score.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCharacter {
    pub nombre: String,
    pub clase: Option<String>,
    pub raza: Option<String>,
    pub nivel: Option<i64>,
    pub hp_max: Option<i64>,
    pub hp_actual: Option<i64>,
    pub oro: Option<i64>,
    pub fuerza: Option<i64>,
    pub destreza: Option<i64>,
    pub constitucion: Option<i64>,
    pub inteligencia: Option<i64>,
    pub sabiduria: Option<i64>,
    pub carisma: Option<i64>,
    pub notas: Option<String>,
    pub escudo_id: Option<DbId>,
    pub armadura_id: Option<DbId>,
    pub mano_derecha_id: Option<DbId>,
    pub mano_izquierda_id: Option<DbId>,
}

/// DTO for a partial character update. All fields are optional.
///
/// Absent or `null` scalar fields keep their stored value. Equipment slots
/// separate "absent" (`None`, keep) from an explicit `null`
/// (`Some(None)`, unequip).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCharacter {
    pub nombre: Option<String>,
    pub clase: Option<String>,
    pub raza: Option<String>,
    pub nivel: Option<i64>,
    pub hp_max: Option<i64>,
    pub hp_actual: Option<i64>,
    pub oro: Option<i64>,
    pub fuerza: Option<i64>,
    pub destreza: Option<i64>,
    pub constitucion: Option<i64>,
    pub inteligencia: Option<i64>,
    pub sabiduria: Option<i64>,
    pub carisma: Option<i64>,
    pub notas: Option<String>,
    #[serde(default, deserialize_with = "explicit_null")]
    pub escudo_id: Option<Option<DbId>>,
    #[serde(default, deserialize_with = "explicit_null")]
    pub armadura_id: Option<Option<DbId>>,
    #[serde(default, deserialize_with = "explicit_null")]
    pub mano_derecha_id: Option<Option<DbId>>,
    #[serde(default, deserialize_with = "explicit_null")]
    pub mano_izquierda_id: Option<Option<DbId>>,
}

/// Deserialize a present field (value or `null`) as `Some(_)`.
///
/// Paired with `#[serde(default)]` so an absent field stays `None`.
fn explicit_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl Character {
    /// Overlay the supplied fields of `input` onto this row.
    pub fn apply(&mut self, input: &UpdateCharacter) {
        if let Some(nombre) = &input.nombre {
            self.nombre.clone_from(nombre);
        }
        if input.clase.is_some() {
            self.clase.clone_from(&input.clase);
        }
        if input.raza.is_some() {
            self.raza.clone_from(&input.raza);
        }
        if let Some(notas) = &input.notas {
            self.notas.clone_from(notas);
        }

        let scores = [
            (&mut self.nivel, input.nivel),
            (&mut self.hp_max, input.hp_max),
            (&mut self.hp_actual, input.hp_actual),
            (&mut self.oro, input.oro),
            (&mut self.fuerza, input.fuerza),
            (&mut self.destreza, input.destreza),
            (&mut self.constitucion, input.constitucion),
            (&mut self.inteligencia, input.inteligencia),
            (&mut self.sabiduria, input.sabiduria),
            (&mut self.carisma, input.carisma),
        ];
        for (field, value) in scores {
            if let Some(value) = value {
                *field = value;
            }
        }

        let slots = [
            (&mut self.escudo_id, input.escudo_id),
            (&mut self.armadura_id, input.armadura_id),
            (&mut self.mano_derecha_id, input.mano_derecha_id),
            (&mut self.mano_izquierda_id, input.mano_izquierda_id),
        ];
        for (field, value) in slots {
            if let Some(value) = value {
                *field = value;
            }
        }
    }
}
