//! Repository for the `objetos_predefinidos` catalog.

use pathfinder_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::item_template::{CreateItemTemplate, ItemTemplate};

const COLUMNS: &str = "id, nombre, tipo, peso, valor, descripcion, imagen";

/// Provides CRUD operations for the item library.
pub struct ItemTemplateRepo;

impl ItemTemplateRepo {
    /// List the whole catalog ordered by name.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<ItemTemplate>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM objetos_predefinidos ORDER BY nombre");
        sqlx::query_as::<_, ItemTemplate>(&query).fetch_all(pool).await
    }

    /// Insert a new template, returning its ID.
    pub async fn create(pool: &SqlitePool, input: &CreateItemTemplate) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO objetos_predefinidos (nombre, tipo, peso, valor, descripcion, imagen)
             VALUES (?1, COALESCE(?2, 'Misc'), COALESCE(?3, 0), COALESCE(?4, 0), COALESCE(?5, ''), ?6)
             RETURNING id",
        )
        .bind(&input.nombre)
        .bind(&input.tipo)
        .bind(input.peso)
        .bind(input.valor)
        .bind(&input.descripcion)
        .bind(&input.imagen)
        .fetch_one(pool)
        .await
    }

    /// Overwrite every column of a template. Omitted fields reset to defaults.
    ///
    /// Returns `true` if a row was updated.
    pub async fn replace(
        pool: &SqlitePool,
        id: DbId,
        input: &CreateItemTemplate,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE objetos_predefinidos SET
                nombre = ?2, tipo = COALESCE(?3, 'Misc'), peso = COALESCE(?4, 0),
                valor = COALESCE(?5, 0), descripcion = COALESCE(?6, ''), imagen = ?7
             WHERE id = ?1",
        )
        .bind(id)
        .bind(&input.nombre)
        .bind(&input.tipo)
        .bind(input.peso)
        .bind(input.valor)
        .bind(&input.descripcion)
        .bind(&input.imagen)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a template. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM objetos_predefinidos WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
