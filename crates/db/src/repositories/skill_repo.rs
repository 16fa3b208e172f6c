//! Repository for the `habilidades` table.

use pathfinder_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::skill::{CreateSkill, Skill};

const COLUMNS: &str = "id, personaje_id, nombre, atributo, rango, entrenamiento";

/// Provides list/create/delete for character skills.
pub struct SkillRepo;

impl SkillRepo {
    /// List all skills owned by a character, in insertion order.
    pub async fn list_by_character(
        pool: &SqlitePool,
        personaje_id: DbId,
    ) -> Result<Vec<Skill>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM habilidades WHERE personaje_id = ?1 ORDER BY id");
        sqlx::query_as::<_, Skill>(&query)
            .bind(personaje_id)
            .fetch_all(pool)
            .await
    }

    /// Insert a new skill, returning its ID.
    pub async fn create(pool: &SqlitePool, input: &CreateSkill) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO habilidades (personaje_id, nombre, atributo, rango, entrenamiento)
             VALUES (?1, ?2, COALESCE(?3, 'inteligencia'), COALESCE(?4, 1), COALESCE(?5, 'Básico'))
             RETURNING id",
        )
        .bind(input.personaje_id)
        .bind(&input.nombre)
        .bind(&input.atributo)
        .bind(input.rango)
        .bind(&input.entrenamiento)
        .fetch_one(pool)
        .await
    }

    /// Delete a skill. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM habilidades WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
