//! Repository for the `habilidades_predefinidas` catalog.

use pathfinder_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::skill_template::{CreateSkillTemplate, SkillTemplate};

const COLUMNS: &str = "id, nombre, clase, nivel_minimo, entrenamiento, atributo";

/// Provides list, create and delete for the skill library.
pub struct SkillTemplateRepo;

impl SkillTemplateRepo {
    /// List the whole catalog ordered by name.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<SkillTemplate>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM habilidades_predefinidas ORDER BY nombre");
        sqlx::query_as::<_, SkillTemplate>(&query).fetch_all(pool).await
    }

    /// Insert a new template, returning its ID.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateSkillTemplate,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO habilidades_predefinidas (nombre, clase, nivel_minimo, entrenamiento, atributo)
             VALUES (?1, ?2, COALESCE(?3, 1), COALESCE(?4, 'Básico'), COALESCE(?5, 'inteligencia'))
             RETURNING id",
        )
        .bind(&input.nombre)
        .bind(&input.clase)
        .bind(input.nivel_minimo)
        .bind(&input.entrenamiento)
        .bind(&input.atributo)
        .fetch_one(pool)
        .await
    }

    /// Delete a template. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM habilidades_predefinidas WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
